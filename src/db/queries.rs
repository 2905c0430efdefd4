// Database queries: CRUD operations for all tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::Result;
use rusqlite::{params, Connection};

// --- Enrolled courses ---

/// Course names from the status tracker, in insertion order.
pub fn get_status_course_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT course_name FROM course_status ORDER BY id")?;
    let rows = stmt.query_map([], |row| row.get(0))?;

    let mut names = Vec::new();
    for row in rows {
        names.push(row?);
    }
    Ok(names)
}

/// Course names from the owned list, in insertion order.
pub fn get_owned_course_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM own_course ORDER BY id")?;
    let rows = stmt.query_map([], |row| row.get(0))?;

    let mut names = Vec::new();
    for row in rows {
        names.push(row?);
    }
    Ok(names)
}

/// Record a course in the status tracker.
pub fn insert_status_course(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO course_status (course_name) VALUES (?1)",
        params![name],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Record a course in the owned list.
pub fn insert_owned_course(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute("INSERT INTO own_course (name) VALUES (?1)", params![name])?;
    Ok(conn.last_insert_rowid())
}

/// Row counts for the two origin tables: (status, owned).
pub fn count_courses(conn: &Connection) -> Result<(i64, i64)> {
    let status: i64 = conn.query_row("SELECT COUNT(*) FROM course_status", [], |row| row.get(0))?;
    let owned: i64 = conn.query_row("SELECT COUNT(*) FROM own_course", [], |row| row.get(0))?;
    Ok((status, owned))
}

// --- Cached recommendation set ---

/// Store the latest run (singleton, always id=1).
pub fn save_recommendation_set(
    conn: &Connection,
    set_json: &str,
    query_count: u32,
    catalog_count: u32,
) -> Result<()> {
    conn.execute(
        "INSERT INTO recommendation_set (id, set_json, query_count, catalog_count, updated_at)
         VALUES (1, ?1, ?2, ?3, datetime('now'))
         ON CONFLICT(id) DO UPDATE SET
            set_json = ?1,
            query_count = ?2,
            catalog_count = ?3,
            updated_at = datetime('now')",
        params![set_json, query_count, catalog_count],
    )?;
    Ok(())
}

/// Load the cached run: (set_json, query_count, catalog_count, updated_at).
/// catalog_count is None for rows written before migration v2.
pub fn get_recommendation_set(
    conn: &Connection,
) -> Result<Option<(String, u32, Option<u32>, String)>> {
    let mut stmt = conn.prepare(
        "SELECT set_json, query_count, catalog_count, updated_at
         FROM recommendation_set WHERE id = 1",
    )?;
    let result = stmt
        .query_row([], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })
        .optional()?;
    Ok(result)
}

// rusqlite's optional() helper — converts "no rows" into None
use rusqlite::OptionalExtension;

// System status display: DB stats, stored course counts, catalog presence,
// last run age.

use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::db;
use crate::db::queries;

/// Display system status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    if !Path::new(&config.db_path).exists() {
        println!("Database: not initialized");
        println!("\nRun `advisor init` to set up the database.");
        return Ok(());
    }

    let conn = db::open(&config.db_path)?;

    // Database file size
    let file_size = std::fs::metadata(&config.db_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", config.db_path, file_size);

    // Stored courses
    let (status_count, owned_count) = queries::count_courses(&conn)?;
    println!(
        "Stored courses: {} in status, {} owned",
        status_count, owned_count
    );
    if status_count == 0 && owned_count == 0 {
        println!("  Run `advisor add <name>` to record one");
    }

    // Catalog file
    if Path::new(&config.catalog_path).exists() {
        let catalog_size = std::fs::metadata(&config.catalog_path)
            .map(|m| format_bytes(m.len()))
            .unwrap_or_else(|_| "unknown".to_string());
        // An unreadable catalog is `recommend`'s problem; status stays up
        match catalog_row_count(&config.catalog_path) {
            Ok(rows) => println!(
                "Catalog: {} ({} rows, {})",
                config.catalog_path, rows, catalog_size
            ),
            Err(_) => println!("Catalog: {} ({})", config.catalog_path, catalog_size),
        }
    } else {
        println!("Catalog: not found at {}", config.catalog_path);
        println!("  Set ADVISOR_CATALOG_PATH to your Coursera CSV export");
    }

    // Last recommendation run
    match queries::get_recommendation_set(&conn)? {
        Some((_json, query_count, Some(catalog_count), updated_at)) => {
            println!(
                "Last run: {} queries against {} catalog entries ({})",
                query_count, catalog_count, updated_at
            );
        }
        Some((_json, query_count, None, updated_at)) => {
            println!("Last run: {} queries ({})", query_count, updated_at);
        }
        None => {
            println!("Last run: never");
            println!("  Run `advisor recommend` to build recommendations");
        }
    }

    Ok(())
}

/// Count catalog data rows without deserializing them.
fn catalog_row_count(path: &str) -> Result<usize> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = 0;
    for record in reader.records() {
        record?;
        rows += 1;
    }
    Ok(rows)
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

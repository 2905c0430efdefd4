// Query source: enrolled course names from the relational store.
//
// Two fixed queries (the status tracker and the owned list) feed one merged,
// duplicate-free list of names. That list drives the similarity engine, and
// its order is the order recommendations are produced and displayed in.

use std::collections::HashSet;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::info;

use crate::db::queries;

/// Merge the two origin lists, keeping first-occurrence order.
///
/// Status courses come first, then owned courses; a name already seen is
/// skipped. No sorting: order in is order out.
pub fn merge_distinct(status: &[String], owned: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = status.iter().chain(owned.iter()).cloned().collect();
    let mut seen = HashSet::new();
    merged.retain(|name| seen.insert(name.clone()));
    merged
}

/// Fetch and merge every enrolled course name.
///
/// Database errors propagate. An unreachable or corrupt store is not the
/// same thing as an empty one, and only the latter means "nothing to do".
pub fn fetch_course_names(conn: &Connection) -> Result<Vec<String>> {
    let status = queries::get_status_course_names(conn)
        .context("Failed to read course names from course_status")?;
    let owned = queries::get_owned_course_names(conn)
        .context("Failed to read course names from own_course")?;

    let merged = merge_distinct(&status, &owned);
    info!(
        status = status.len(),
        owned = owned.len(),
        distinct = merged.len(),
        "Course names fetched"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_keeps_status_before_owned() {
        let merged = merge_distinct(&names(&["A", "B"]), &names(&["C", "D"]));
        assert_eq!(merged, names(&["A", "B", "C", "D"]));
    }

    #[test]
    fn test_merge_drops_duplicates_across_lists() {
        let merged = merge_distinct(&names(&["A", "B"]), &names(&["B", "C"]));
        assert_eq!(merged, names(&["A", "B", "C"]));
    }

    #[test]
    fn test_merge_drops_duplicates_within_a_list() {
        let merged = merge_distinct(&names(&["A", "A", "B"]), &names(&[]));
        assert_eq!(merged, names(&["A", "B"]));
    }

    #[test]
    fn test_merge_first_occurrence_wins() {
        // "B" first appears second in status; it must stay in that position
        let merged = merge_distinct(&names(&["A", "B", "A"]), &names(&["B", "A", "C"]));
        assert_eq!(merged, names(&["A", "B", "C"]));
    }

    #[test]
    fn test_merge_both_empty() {
        let merged = merge_distinct(&[], &[]);
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_is_case_sensitive() {
        // "python" and "Python" are distinct names as far as the store goes
        let merged = merge_distinct(&names(&["Python"]), &names(&["python"]));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_fetch_merges_from_both_tables() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        queries::insert_status_course(&conn, "Machine Learning").unwrap();
        queries::insert_status_course(&conn, "Data Structures").unwrap();
        queries::insert_owned_course(&conn, "Machine Learning").unwrap();
        queries::insert_owned_course(&conn, "Linear Algebra").unwrap();

        let merged = fetch_course_names(&conn).unwrap();
        assert_eq!(
            merged,
            names(&["Machine Learning", "Data Structures", "Linear Algebra"])
        );
    }

    #[test]
    fn test_fetch_empty_store_is_ok_and_empty() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        let merged = fetch_course_names(&conn).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_fetch_propagates_store_errors() {
        // A connection without the schema behaves like a broken store:
        // the caller gets an error, not a silently empty list
        let conn = Connection::open_in_memory().unwrap();
        let result = fetch_course_names(&conn);
        assert!(result.is_err());
    }
}

// Unit tests for the query source: reading enrolled course names out of
// the two store tables and merging them into one deduplicated list.

use advisor::courses::{fetch_course_names, merge_distinct};
use advisor::db::queries::{insert_owned_course, insert_status_course};
use advisor::db::schema::create_tables;
use rusqlite::Connection;

fn fresh_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    create_tables(&conn).unwrap();
    conn
}

// ============================================================
// fetch_course_names: store-backed reads
// ============================================================

#[test]
fn empty_store_yields_empty_list() {
    let conn = fresh_db();
    let names = fetch_course_names(&conn).unwrap();
    assert!(names.is_empty());
}

#[test]
fn status_courses_come_before_owned_courses() {
    let conn = fresh_db();
    insert_owned_course(&conn, "Owned First").unwrap();
    insert_status_course(&conn, "Status First").unwrap();
    insert_status_course(&conn, "Status Second").unwrap();

    let names = fetch_course_names(&conn).unwrap();
    assert_eq!(
        names,
        vec!["Status First", "Status Second", "Owned First"],
        "Status table is read in full before the owned table"
    );
}

#[test]
fn insertion_order_is_preserved_within_each_table() {
    let conn = fresh_db();
    insert_status_course(&conn, "Zebra Studies").unwrap();
    insert_status_course(&conn, "Apple Farming").unwrap();
    insert_status_course(&conn, "Mango Cultivation").unwrap();

    let names = fetch_course_names(&conn).unwrap();
    assert_eq!(names, vec!["Zebra Studies", "Apple Farming", "Mango Cultivation"]);
}

#[test]
fn duplicate_across_tables_appears_once() {
    let conn = fresh_db();
    insert_status_course(&conn, "Linear Algebra").unwrap();
    insert_owned_course(&conn, "Linear Algebra").unwrap();
    insert_owned_course(&conn, "Graph Theory").unwrap();

    let names = fetch_course_names(&conn).unwrap();
    assert_eq!(names, vec!["Linear Algebra", "Graph Theory"]);
}

#[test]
fn duplicate_within_one_table_appears_once() {
    let conn = fresh_db();
    insert_status_course(&conn, "Statistics").unwrap();
    insert_status_course(&conn, "Statistics").unwrap();

    let names = fetch_course_names(&conn).unwrap();
    assert_eq!(names, vec!["Statistics"]);
}

#[test]
fn missing_schema_is_an_error_not_an_empty_list() {
    // A connection with no tables at all: reads must fail loudly
    let conn = Connection::open_in_memory().unwrap();
    let result = fetch_course_names(&conn);
    assert!(
        result.is_err(),
        "A broken store should surface as an error, not as zero courses"
    );
}

// ============================================================
// merge_distinct: pure merge behavior
// ============================================================

#[test]
fn merge_keeps_first_occurrence_and_drops_later_ones() {
    let status = vec!["A".to_string(), "B".to_string()];
    let owned = vec!["B".to_string(), "C".to_string(), "A".to_string()];

    let merged = merge_distinct(&status, &owned);
    assert_eq!(merged, vec!["A", "B", "C"]);
}

#[test]
fn merge_is_case_sensitive() {
    let status = vec!["machine learning".to_string()];
    let owned = vec!["Machine Learning".to_string()];

    let merged = merge_distinct(&status, &owned);
    assert_eq!(
        merged.len(),
        2,
        "Names differing only in case are distinct queries"
    );
}

#[test]
fn merge_of_two_empty_lists_is_empty() {
    let merged = merge_distinct(&[], &[]);
    assert!(merged.is_empty());
}

// Catalog ingestion: typed rows from the Coursera CSV export.
//
// The CSV header is a fixed contract. We check it up front so a wrong or
// stale export fails with the missing column names instead of a serde error
// pointing at record 1. Any malformed row is fatal: a partially loaded
// catalog would silently skew every similarity score downstream.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Column headers the catalog file must carry, in any order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Course Name",
    "Course Description",
    "Skills",
    "University",
    "Difficulty Level",
    "Course Rating",
    "Course URL",
];

/// One catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "Course Name")]
    pub name: String,
    #[serde(rename = "Course Description")]
    pub description: String,
    #[serde(rename = "Skills")]
    pub skills: String,
    #[serde(rename = "University")]
    pub university: String,
    #[serde(rename = "Difficulty Level")]
    pub difficulty: String,
    #[serde(rename = "Course Rating")]
    pub rating: f64,
    #[serde(rename = "Course URL")]
    pub url: String,
}

impl CatalogEntry {
    /// The text the vectorizer sees: name, description, and skills joined
    /// with single spaces.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.skills)
    }
}

/// Load and validate the catalog CSV.
pub fn load_catalog(path: &str) -> Result<Vec<CatalogEntry>> {
    let mut reader = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("Failed to open catalog file {}", path))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read catalog header row from {}", path))?
        .clone();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .copied()
        .collect();
    if !missing.is_empty() {
        anyhow::bail!(
            "Catalog file {} is missing required columns: {}",
            path,
            missing.join(", ")
        );
    }

    let mut entries = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        // The header is line 1, so the first record is line 2
        let entry: CatalogEntry =
            record.with_context(|| format!("Malformed catalog record at line {}", i + 2))?;
        entries.push(entry);
    }

    info!(rows = entries.len(), path, "Catalog loaded");

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Course Name,University,Difficulty Level,Course Rating,Course URL,Course Description,Skills";

    fn write_catalog(path: &str, rows: &[&str]) {
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_basic_catalog() {
        let path = "/tmp/advisor_test_catalog_basic.csv";
        write_catalog(
            path,
            &[
                "Machine Learning,Stanford University,Beginner,4.9,https://example.org/ml,\"Learn regression, classification, and more.\",machine learning  regression",
                "Italian Cooking,Food Academy,Intermediate,4.2,https://example.org/cook,Pasta and regional sauces.,cooking  cuisine",
            ],
        );

        let entries = load_catalog(path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Machine Learning");
        assert_eq!(entries[0].university, "Stanford University");
        assert_eq!(entries[0].difficulty, "Beginner");
        assert!((entries[0].rating - 4.9).abs() < 1e-9);
        assert_eq!(entries[0].url, "https://example.org/ml");
        assert_eq!(entries[1].skills, "cooking  cuisine");

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_combined_text_joins_name_description_skills() {
        let path = "/tmp/advisor_test_catalog_combined.csv";
        write_catalog(
            path,
            &["Rust Basics,Uni,Beginner,4.5,https://example.org/rust,Ownership and borrowing.,systems  rust"],
        );

        let entries = load_catalog(path).unwrap();
        assert_eq!(
            entries[0].combined_text(),
            "Rust Basics Ownership and borrowing. systems  rust"
        );

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_column_names_the_column() {
        let path = "/tmp/advisor_test_catalog_missing_col.csv";
        // No "Skills" column
        std::fs::write(
            path,
            "Course Name,University,Difficulty Level,Course Rating,Course URL,Course Description\n\
             ML,Uni,Beginner,4.5,https://example.org,desc",
        )
        .unwrap();

        let err = load_catalog(path).unwrap_err();
        assert!(
            err.to_string().contains("Skills"),
            "Error should name the missing column: {err}"
        );

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_malformed_rating_is_fatal_and_names_the_line() {
        let path = "/tmp/advisor_test_catalog_bad_rating.csv";
        write_catalog(
            path,
            &[
                "Good Course,Uni,Beginner,4.5,https://example.org/a,desc,skills",
                "Bad Course,Uni,Beginner,not-a-number,https://example.org/b,desc,skills",
            ],
        );

        let err = load_catalog(path).unwrap_err();
        assert!(
            format!("{err:#}").contains("line 3"),
            "Error should identify the offending line: {err:#}"
        );

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_errors() {
        let result = load_catalog("/tmp/advisor_test_catalog_does_not_exist.csv");
        assert!(result.is_err());
    }

    #[test]
    fn test_header_only_catalog_is_empty() {
        let path = "/tmp/advisor_test_catalog_header_only.csv";
        write_catalog(path, &[]);

        let entries = load_catalog(path).unwrap();
        assert!(entries.is_empty());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let path = "/tmp/advisor_test_catalog_reordered.csv";
        std::fs::write(
            path,
            "Skills,Course URL,Course Rating,Difficulty Level,University,Course Description,Course Name\n\
             data  pandas,https://example.org/d,4.1,Advanced,Uni,Dataframes in depth.,Data Analysis",
        )
        .unwrap();

        let entries = load_catalog(path).unwrap();
        assert_eq!(entries[0].name, "Data Analysis");
        assert_eq!(entries[0].skills, "data  pandas");

        let _ = std::fs::remove_file(path);
    }
}

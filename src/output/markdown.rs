// Markdown report generation.
//
// Writes the cached recommendation set as a standalone report: a summary
// table, then one section per query with its ranked courses. Free text from
// the catalog goes through escape_cell so it can't break table layout.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::engine::RecommendationSet;

/// Write the recommendation report to `path` and return the path.
pub fn generate_report(
    set: &RecommendationSet,
    catalog_count: Option<u32>,
    generated_at: &str,
    path: &str,
) -> Result<String> {
    let mut report = String::new();

    report.push_str("# Advisor Course Recommendations\n\n");
    let _ = writeln!(report, "Last run: {generated_at}\n");

    // Summary table
    report.push_str("## Summary\n\n");
    report.push_str("| Metric | Value |\n");
    report.push_str("|---|---|\n");
    let _ = writeln!(report, "| Enrolled courses (queries) | {} |", set.queries.len());
    if let Some(count) = catalog_count {
        let _ = writeln!(report, "| Catalog entries scored | {count} |");
    }
    let _ = writeln!(
        report,
        "| **Total recommendations** | **{}** |",
        set.total_recommendations()
    );
    report.push('\n');

    // One section per query
    for block in &set.queries {
        let _ = writeln!(report, "## {}\n", escape_cell(&block.query));
        report.push_str("| Rank | Course | University | Difficulty | Rating | Score |\n");
        report.push_str("|---|---|---|---|---|---|\n");
        for rec in &block.recommendations {
            let _ = writeln!(
                report,
                "| {} | [{}]({}) | {} | {} | {:.1} | {:.3} |",
                rec.rank,
                escape_cell(&rec.course_name),
                rec.url,
                escape_cell(&rec.university),
                escape_cell(&rec.difficulty),
                rec.rating,
                rec.score,
            );
        }
        report.push('\n');
    }

    if set.is_empty() {
        report.push_str("No enrolled courses were found, so there is nothing to recommend.\n");
    }

    // Create the output directory if needed
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory for {}", path))?;
        }
    }

    std::fs::write(path, report).with_context(|| format!("Failed to write report to {}", path))?;

    Ok(path.to_string())
}

/// Escape pipe characters and newlines so free text can sit in a table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

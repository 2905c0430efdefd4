// Colored terminal output for recommendation blocks and course lists.
//
// This module handles all terminal-specific formatting: colors, alignment,
// truncation. The main.rs display calls delegate here.

use colored::Colorize;

use crate::engine::{QueryRecommendations, RecommendationSet};

/// Display every query's recommendation block.
pub fn display_recommendation_set(set: &RecommendationSet) {
    if set.is_empty() {
        println!("No courses found in the database!");
        return;
    }

    for query_block in &set.queries {
        display_query_block(query_block);
    }
}

fn display_query_block(block: &QueryRecommendations) {
    println!(
        "\n{}",
        format!(
            "=== Top {} Recommendations for: {} ===",
            block.recommendations.len(),
            block.query
        )
        .bold()
    );
    println!();

    for rec in &block.recommendations {
        println!(
            "  {}. {} {}",
            rec.rank,
            rec.course_name.bold(),
            format!("(score {:.3})", rec.score).dimmed()
        );
        println!("     University: {}", rec.university);
        println!(
            "     Difficulty: {}  Rating: {:.1}",
            colorize_difficulty(&rec.difficulty),
            rec.rating
        );
        let skills = super::truncate_chars(&rec.skills, 100);
        println!("     Skills: {}", skills.dimmed());
        println!("     {}", rec.url.dimmed());
        println!();
    }
}

/// Display the stored course names, grouped by origin table.
pub fn display_course_list(status: &[String], owned: &[String]) {
    if status.is_empty() && owned.is_empty() {
        println!("No courses stored yet. Run `advisor add <name>` to record one.");
        return;
    }

    if !status.is_empty() {
        println!(
            "\n{}",
            format!("=== Status courses ({}) ===", status.len()).bold()
        );
        for name in status {
            println!("  {name}");
        }
    }

    if !owned.is_empty() {
        println!(
            "\n{}",
            format!("=== Owned courses ({}) ===", owned.len()).bold()
        );
        for name in owned {
            println!("  {name}");
        }
    }
}

/// Colorize a catalog difficulty label.
fn colorize_difficulty(difficulty: &str) -> colored::ColoredString {
    match difficulty {
        "Beginner" => difficulty.green(),
        "Intermediate" => difficulty.yellow(),
        "Advanced" => difficulty.red(),
        _ => difficulty.normal(),
    }
}

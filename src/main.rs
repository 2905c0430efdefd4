use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use advisor::config::Config;

/// Advisor: course recommendations from your enrollment history.
///
/// Matches the courses you're taking (or own) against a Coursera catalog
/// export and surfaces the most similar courses by TF-IDF cosine score.
#[derive(Parser)]
#[command(name = "advisor", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Record a course you're taking (or own, with --owned)
    Add {
        /// The course name, as it should be matched against the catalog
        name: String,

        /// Record in the owned list instead of the status list
        #[arg(long)]
        owned: bool,
    },

    /// List the stored course names
    Courses,

    /// Score the catalog and show recommendations per stored course
    Recommend {
        /// Recommendations per course (default: 5, or ADVISOR_TOP_K)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Write the last run as a markdown report
    Report {
        /// Where to write the report
        #[arg(long, default_value = "output/advisor-report.md")]
        markdown: String,
    },

    /// Show system status (DB stats, catalog presence, last run)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("advisor=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing advisor database...");
            let config = Config::load()?;
            let conn = advisor::db::initialize(&config.db_path)?;
            let table_count = advisor::db::schema::table_count(&conn)?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nAdvisor is ready. Next steps:");
            println!("  advisor add \"Machine Learning\"");
            println!("  advisor recommend");
        }

        Commands::Add { name, owned } => {
            let config = Config::load()?;
            let conn = advisor::db::open(&config.db_path)?;
            if owned {
                advisor::db::queries::insert_owned_course(&conn, &name)?;
                println!("Recorded owned course: {}", name.bold());
            } else {
                advisor::db::queries::insert_status_course(&conn, &name)?;
                println!("Recorded status course: {}", name.bold());
            }
        }

        Commands::Courses => {
            let config = Config::load()?;
            let conn = advisor::db::open(&config.db_path)?;
            let status = advisor::db::queries::get_status_course_names(&conn)?;
            let owned = advisor::db::queries::get_owned_course_names(&conn)?;
            advisor::output::terminal::display_course_list(&status, &owned);

            let merged = advisor::courses::merge_distinct(&status, &owned);
            if !merged.is_empty() {
                println!(
                    "\n{}",
                    format!("{} distinct after merging.", merged.len()).dimmed()
                );
            }
        }

        Commands::Recommend { top } => {
            let config = Config::load()?;
            config.require_catalog()?;
            let conn = advisor::db::open(&config.db_path)?;

            let queries = advisor::courses::fetch_course_names(&conn)?;
            if queries.is_empty() {
                println!("No courses found in the database!");
                println!("{}", "Run `advisor add <name>` to record one.".dimmed());
                return Ok(());
            }

            println!("Loading catalog from {}...", config.catalog_path);
            let catalog = advisor::catalog::load_catalog(&config.catalog_path)?;

            let top_k = config.resolve_top_k(top)?;
            println!(
                "Scoring {} courses against {} catalog entries...",
                queries.len(),
                catalog.len()
            );
            let set = advisor::engine::recommend(&queries, &catalog, top_k)?;

            advisor::output::terminal::display_recommendation_set(&set);

            // Cache in the database so `report` and `status` can reuse it
            let json = serde_json::to_string(&set)?;
            advisor::db::queries::save_recommendation_set(
                &conn,
                &json,
                queries.len() as u32,
                catalog.len() as u32,
            )?;
            info!(
                queries = queries.len(),
                catalog = catalog.len(),
                "Recommendation set cached"
            );
            println!(
                "{}",
                "Saved. Run `advisor report` for a markdown copy.".dimmed()
            );
        }

        Commands::Report { markdown } => {
            let config = Config::load()?;
            let conn = advisor::db::open(&config.db_path)?;

            match advisor::db::queries::get_recommendation_set(&conn)? {
                Some((json, _query_count, catalog_count, updated_at)) => {
                    let set: advisor::engine::RecommendationSet = serde_json::from_str(&json)?;
                    advisor::output::terminal::display_recommendation_set(&set);

                    let report_path = advisor::output::markdown::generate_report(
                        &set,
                        catalog_count,
                        &updated_at,
                        &markdown,
                    )?;
                    println!(
                        "\n{}",
                        format!("Markdown report saved to: {report_path}").bold()
                    );
                }
                None => {
                    println!("No recommendations yet. Run `advisor recommend` first.");
                }
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            advisor::status::show(&config)?;
        }
    }

    Ok(())
}

use std::env;
use std::path::Path;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// Everything has a sensible local default, so a bare `advisor init` works
/// out of the box. The .env file is loaded automatically at startup via
/// dotenvy.
pub struct Config {
    pub db_path: String,
    /// Path to the catalog CSV export (ADVISOR_CATALOG_PATH)
    pub catalog_path: String,
    /// Recommendations kept per enrolled course (ADVISOR_TOP_K)
    pub top_k: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let top_k = match env::var("ADVISOR_TOP_K") {
            Ok(raw) => {
                let parsed: usize = raw.parse().with_context(|| {
                    format!("ADVISOR_TOP_K must be a positive integer, got '{raw}'")
                })?;
                if parsed == 0 {
                    anyhow::bail!("ADVISOR_TOP_K must be at least 1");
                }
                parsed
            }
            Err(_) => crate::engine::DEFAULT_TOP_K,
        };

        Ok(Self {
            db_path: env::var("ADVISOR_DB_PATH").unwrap_or_else(|_| "./advisor.db".to_string()),
            catalog_path: env::var("ADVISOR_CATALOG_PATH")
                .unwrap_or_else(|_| "./Coursera.csv".to_string()),
            top_k,
        })
    }

    /// Check that the catalog file exists.
    /// Call this before any operation that needs to score the catalog.
    pub fn require_catalog(&self) -> Result<()> {
        if !Path::new(&self.catalog_path).exists() {
            anyhow::bail!(
                "Catalog file not found at {}.\n\
                 Set ADVISOR_CATALOG_PATH in your .env file to your Coursera CSV export.",
                self.catalog_path
            );
        }
        Ok(())
    }

    /// Effective per-run recommendation count.
    ///
    /// A CLI override beats the configured default, but zero is rejected
    /// either way, same as for ADVISOR_TOP_K.
    pub fn resolve_top_k(&self, requested: Option<usize>) -> Result<usize> {
        match requested {
            Some(0) => anyhow::bail!("--top must be at least 1"),
            Some(top_k) => Ok(top_k),
            None => Ok(self.top_k),
        }
    }
}

//! Command implementations for the trivia CLI

pub mod db;
pub mod serve;

pub use db::{run_migrate, run_seed};
pub use serve::run_serve;

use anyhow::{Context, Result};

/// Resolve the database URL from the flag or environment.
fn require_database_url(database_url: Option<String>) -> Result<String> {
    database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .filter(|url| !url.trim().is_empty())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ./.env")
}

//! Schema and seed commands

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{create_pool, migrations};

use super::require_database_url;

/// Arguments shared by `migrate` and `seed`
#[derive(Parser, Debug)]
pub struct DbArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: DbArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("Schema is up to date");
    Ok(())
}

/// Seed runs migrations first so it works against an empty database.
pub async fn run_seed(args: DbArgs) -> Result<()> {
    let database_url = require_database_url(args.database_url)?;
    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;
    let inserted = migrations::seed_categories(&pool)
        .await
        .context("Failed to seed categories")?;

    println!("Inserted {} default categories", inserted);
    Ok(())
}

//! trivia CLI - run and administer the trivia question API
//!
//! - `serve`: run the HTTP API (Postgres or in-memory store)
//! - `migrate`: create the database schema
//! - `seed`: insert the default categories

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia question API: categories, paginated questions, search and quizzes"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create tables and indexes (idempotent)
    Migrate(commands::db::DbArgs),
    /// Insert the default categories (idempotent)
    Seed(commands::db::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap so `env = "DATABASE_URL"` sees it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }
    Ok(())
}

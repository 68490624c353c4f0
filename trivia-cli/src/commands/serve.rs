//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};
use trivia_server::{run_server, MemoryStore, PgStore, ServerConfig, TriviaStore};

use super::require_database_url;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Serve from an in-memory store seeded with the default categories
    /// (any database URL is ignored)
    #[arg(long)]
    pub in_memory: bool,

    /// Extra category for the in-memory store (repeatable)
    #[arg(long = "category", value_name = "NAME", requires = "in_memory")]
    pub categories: Vec<String>,

    /// Skip schema creation at startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn TriviaStore> = if args.in_memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        let store = MemoryStore::with_default_categories();
        for name in &args.categories {
            let category = store.add_category(name).await;
            tracing::info!(id = category.id, kind = %category.kind, "category added");
        }
        Arc::new(store)
    } else {
        let database_url = require_database_url(args.database_url)?;
        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        if !args.no_migrate {
            migrations::run(&pool)
                .await
                .context("Failed to run migrations")?;
        }

        Arc::new(PgStore::new(pool))
    };

    tracing::info!("Starting trivia server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    run_server(store, config).await.context("Server error")?;

    Ok(())
}

//! HTTP server command
//!
//! Opens the database, creates the schema and serves the roster pages
//! until Ctrl+C / SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use roster_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use roster_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ROSTER_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = super::DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "ROSTER_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(database_url = %args.database_url, "Starting roster server on {}", args.bind);

    let pool = create_pool_with_options(&args.database_url, args.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

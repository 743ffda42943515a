//! roster CLI - serve the student roster web app
//!
//! - `serve`: run the HTTP server (list page, form intake, JSON API)
//! - `migrate`: create the database file and schema, then exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    author,
    version,
    about = "Small student roster web app backed by SQLite"
)]
struct Cli {
    /// Debug logging (when RUST_LOG is not set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Create the database and schema without serving
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}

//! Create the database file and schema without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use roster_server::{create_pool, run_migrations, StudentRepo};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL", default_value = super::DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    run_migrations(&pool)
        .await
        .context("Failed to create schema")?;

    let count = StudentRepo::new(&pool)
        .count()
        .await
        .context("Failed to count students")?;

    println!("{}: schema ready, {} student(s)", args.database_url, count);
    pool.close().await;
    Ok(())
}

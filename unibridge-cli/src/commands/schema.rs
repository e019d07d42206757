//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use unibridge_server::db::{create_pool, ensure_schema};
use unibridge_server::DbConfig;

use crate::config::DbArgs;

/// Arguments for the init-schema command
#[derive(Parser, Debug)]
pub struct InitSchemaArgs {
    #[command(flatten)]
    pub db: DbArgs,
}

/// Create any missing university tables and exit
pub async fn run_init_schema(args: InitSchemaArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    ensure_schema(&pool)
        .await
        .context("Failed to initialize schema")?;

    pool.close().await;
    println!("Schema ready in database '{}'", db_config.database);
    Ok(())
}

//! HTTP server command

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use unibridge_server::db::{create_pool, ensure_schema};
use unibridge_server::{run_server, AppState, DbConfig, MySqlStore, ServerConfig};

use crate::config::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "BIND_HOST", default_value = "127.0.0.1")]
    pub bind_host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Create missing university tables before serving
    #[arg(long)]
    pub init_schema: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from(args.db);
    let bind_addr = SocketAddr::new(args.bind_host, args.port);

    tracing::info!(
        host = %db_config.host,
        port = db_config.port,
        database = %db_config.database,
        "Connecting to database"
    );

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    if args.init_schema {
        ensure_schema(&pool)
            .await
            .context("Failed to initialize schema")?;
    }

    let state = AppState::new(Arc::new(MySqlStore::new(pool)), db_config.database);
    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}

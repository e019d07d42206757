//! unibridge CLI - HTTP bridge for the university database
//!
//! Loads `.env`, initializes tracing, builds the connection pool once and
//! serves the REST catalog until shutdown.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "unibridge",
    author,
    version,
    about = "REST bridge for the university database (students, faculty, courses)"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create missing university tables and exit
    InitSchema(commands::schema::InitSchemaArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Must run before parsing so env fallbacks see .env values
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitSchema(args) => commands::run_init_schema(args).await?,
    }

    Ok(())
}

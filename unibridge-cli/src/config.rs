//! Database connection settings from flags and environment
//!
//! Every flag falls back to the variable named in its `env`, and `.env`
//! in the working directory is loaded before parsing.

use std::time::Duration;

use clap::Args;
use unibridge_server::db::pool::{DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT};
use unibridge_server::DbConfig;

/// Database connection arguments shared by all commands
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = DEFAULT_PORT)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database (schema) name, e.g. universitydb
    #[arg(long, env = "DB_NAME")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection before failing a request
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 30)]
    pub db_acquire_timeout_secs: u64,
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        let mut config = DbConfig::new(args.db_host, args.db_user, args.db_password, args.db_name);
        config.port = args.db_port;
        config.max_connections = args.db_max_connections;
        config.acquire_timeout = Duration::from_secs(args.db_acquire_timeout_secs);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        db: DbArgs,
    }

    #[test]
    fn flags_map_onto_db_config() {
        let cli = TestCli::try_parse_from([
            "test",
            "--db-host",
            "db.internal",
            "--db-port",
            "3307",
            "--db-user",
            "app",
            "--db-password",
            "secret",
            "--db-name",
            "universitydb",
            "--db-acquire-timeout-secs",
            "5",
        ])
        .unwrap();

        let config = DbConfig::from(cli.db);
        assert_eq!(config.host, "db.internal");
        assert_eq!(config.port, 3307);
        assert_eq!(config.user, "app");
        assert_eq!(config.database, "universitydb");
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }
}

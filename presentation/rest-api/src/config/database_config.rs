use persistence::db::{DatabaseConfig, DriverKind};

use super::env::get_env;

/// Load database settings from environment variables
///
/// Environment variables:
/// - DB_HOST: Database host (default: "localhost")
/// - DB_USER: Database user (default: "root")
/// - DB_PASSWORD: Database password (default: "root")
/// - DB_NAME: Database name (default: "chandafa_gotoko")
/// - DB_PORT: Database port (default: "5432")
/// - DB_DRIVER: "postgres" or "mysql" (default: "postgres")
pub fn from_env() -> DatabaseConfig {
    DatabaseConfig::new(
        get_env("DB_HOST", "localhost"),
        get_env("DB_USER", "root"),
        get_env("DB_PASSWORD", "root"),
        get_env("DB_NAME", "chandafa_gotoko"),
        get_env("DB_PORT", "5432"),
        DriverKind::parse(&get_env("DB_DRIVER", "postgres")),
    )
}

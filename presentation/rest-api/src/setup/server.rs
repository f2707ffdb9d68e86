use persistence::db::{DatabaseConfig, create_pool};
use persistence::migration;
use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use sqlx::AnyPool;

use crate::{config::app_config::AppConfig, setup::routes};

/// HTTP server holding the shared connection pool and the route table.
pub struct Server {
    pool: AnyPool,
    routes: Route,
}

impl Server {
    /// Connect to the database, reconcile the schema and assemble the routes.
    ///
    /// Any failure bubbles up to `main` so the process exits non-zero before
    /// the listener is ever bound.
    pub async fn initialize(config: &AppConfig, db_config: DatabaseConfig) -> anyhow::Result<Self> {
        println!("Welcome to {}", config.name);

        let driver = db_config.driver;
        let pool = create_pool(&db_config).await?;
        migration::auto_migrate(&pool, driver).await?;

        let routes = routes::build(&config.name, &config.bind_address());
        Ok(Self { pool, routes })
    }

    /// Bind the listener and serve until the process is stopped.
    pub async fn run(self, addr: String) -> anyhow::Result<()> {
        println!("Server running at http://{}", addr);
        let app = self.routes.with(Tracing).data(self.pool);
        PoemServer::new(TcpListener::bind(addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence::db::DriverKind;
    use std::time::Duration;

    #[tokio::test]
    async fn should_fail_initialization_when_database_unreachable() {
        let config = AppConfig {
            name: "Gotoko".to_string(),
            environment: "development".to_string(),
            port: "9000".to_string(),
        };
        // Nothing listens on port 1; the short timeout keeps the test fast.
        let mut db_config = DatabaseConfig::new(
            "127.0.0.1".to_string(),
            "root".to_string(),
            "root".to_string(),
            "chandafa_gotoko".to_string(),
            "1".to_string(),
            DriverKind::Postgres,
        );
        db_config.acquire_timeout = Duration::from_secs(1);

        let error = Server::initialize(&config, db_config)
            .await
            .err()
            .expect("initialization must fail without a database");

        // Failing at the connection stage means no routes were built.
        assert_eq!(error.to_string(), "database.connection_error");
    }
}

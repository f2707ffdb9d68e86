use clap::Parser;

mod api {
    pub mod tags;
    pub mod home {
        pub mod routes;
    }
}
mod commands;
mod config {
    pub mod app_config;
    pub mod database_config;
    pub mod env;
}
mod setup {
    pub mod routes;
    pub mod server;
}

use commands::Command;
use config::{app_config::AppConfig, database_config};
use setup::server::Server;

#[derive(Parser, Debug)]
#[command(name = "gotoko", version, about = "Gotoko store backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

/// Store Backend Entry Point
///
/// Initializes the application and either starts the HTTP server or runs a
/// maintenance command against the configured database.
///
/// - config/: Environment loading and configuration structs
/// - setup/: Route assembly and server boot
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables; a missing .env file is fatal
    config::env::load()?;

    // 3. Parse the command line before touching the database
    let cli = Cli::parse();

    // 4. Load configuration
    let config = AppConfig::from_env();
    let db_config = database_config::from_env();

    // 5. Dispatch
    match cli.command {
        Some(command) => commands::run(command, db_config).await?,
        None => {
            let server = Server::initialize(&config, db_config).await?;
            server.run(config.bind_address()).await?;
        }
    }

    Ok(())
}

use clap::Subcommand;
use persistence::db::{DatabaseConfig, create_pool};
use persistence::{migration, seeder};

/// Maintenance commands run against the configured database instead of
/// serving HTTP.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconcile the database schema with the model registry
    #[command(name = "db:migrate")]
    DbMigrate,
    /// Insert development fixtures into an empty database
    #[command(name = "db:seed")]
    DbSeed,
}

pub async fn run(command: Command, db_config: DatabaseConfig) -> anyhow::Result<()> {
    tracing::debug!(?command, "running maintenance command");

    let driver = db_config.driver;
    let pool = create_pool(&db_config).await?;

    match command {
        Command::DbMigrate => migration::auto_migrate(&pool, driver).await?,
        Command::DbSeed => seeder::run(&pool, driver).await?,
    }

    Ok(())
}

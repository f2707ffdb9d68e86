use anyhow::Context;
use std::env;

/// Load the `.env` file into the process environment.
///
/// The file is required: a missing or unreadable file aborts startup before
/// any configuration is read.
pub fn load() -> anyhow::Result<()> {
    dotenvy::dotenv().context("Error on loading .env file")?;
    Ok(())
}

/// Read `key` from the environment, falling back to `fallback` when unset.
pub fn get_env(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

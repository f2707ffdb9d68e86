use super::env::get_env;

/// Application identity and HTTP listener settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub name: String,
    pub environment: String,
    pub port: String,
}

impl AppConfig {
    /// Load application configuration from environment variables
    ///
    /// Environment variables:
    /// - APP_NAME: Service name shown in the welcome banner (default: "Gotoko")
    /// - APP_ENV: Runtime environment label (default: "development")
    /// - APP_PORT: Port to bind (default: "9000")
    pub fn from_env() -> Self {
        Self {
            name: get_env("APP_NAME", "Gotoko"),
            environment: get_env("APP_ENV", "development"),
            port: get_env("APP_PORT", "9000"),
        }
    }

    /// Get the bind address as "0.0.0.0:port"
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Welcome response for the store root
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HomeResponse {
    /// Greeting line
    pub message: String,
    /// Service name from configuration
    pub app: String,
    /// Service version
    pub version: String,
    /// Current server timestamp
    pub timestamp: String,
}

/// Home API, the single public route of the store skeleton
pub struct Api {
    app_name: String,
}

impl Api {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

#[OpenApi]
impl Api {
    /// Store front door
    ///
    /// Returns a welcome payload so humans and load balancers can verify the
    /// service is up. This endpoint is public and requires no authentication.
    ///
    /// ## Response
    /// - `message`: Greeting including the configured application name
    /// - `app`: Application name from APP_NAME
    /// - `version`: Service version from Cargo.toml
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    #[oai(path = "/", method = "get", tag = "ApiTags::Home")]
    async fn home(&self) -> Json<HomeResponse> {
        Json(HomeResponse {
            message: format!("Welcome to {}", self.app_name),
            app: self.app_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}

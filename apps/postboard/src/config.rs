//! Application configuration loaded from environment variables.

use postboard_infra::{ConfigError, RestConfig};

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Hosted store settings; `None` runs against the in-memory store.
    pub store: Option<RestConfig>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            store: RestConfig::from_env()?,
            telemetry: TelemetryConfig::from_env(),
        })
    }
}

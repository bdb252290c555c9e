//! Connection settings for the hosted posts table.

use thiserror::Error;

/// Default table holding the posts.
pub const DEFAULT_TABLE: &str = "posts";

/// Configuration for the hosted store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// API key sent as `apikey` and as the bearer token.
    pub api_key: String,
    pub table: String,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but no API key was provided (POSTBOARD_KEY or SUPABASE_ANON_KEY)")]
    MissingKey(String),

    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),
}

impl RestConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `Ok(None)` when no store URL is configured.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |keys: &[&str]| {
            keys.iter()
                .filter_map(|&key| lookup(key))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        let Some(url) = first(&["POSTBOARD_URL", "SUPABASE_URL"]) else {
            return Ok(None);
        };
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url));
        }

        let api_key = first(&["POSTBOARD_KEY", "SUPABASE_ANON_KEY"])
            .ok_or_else(|| ConfigError::MissingKey(url.clone()))?;

        Ok(Some(Self {
            url: url.trim_end_matches('/').to_string(),
            api_key,
            table: first(&["POSTBOARD_TABLE"]).unwrap_or_else(|| DEFAULT_TABLE.to_string()),
        }))
    }
}

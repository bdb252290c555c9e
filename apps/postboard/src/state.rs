//! Store selection - hosted table when configured, in-memory otherwise.

use std::sync::Arc;

use postboard_core::ports::PostStore;
use postboard_infra::{InMemoryPostStore, RestConfig};

#[cfg(feature = "rest")]
use postboard_infra::RestPostStore;

/// Build the store the controller talks to.
pub fn build_store(config: Option<&RestConfig>) -> Arc<dyn PostStore> {
    #[cfg(feature = "rest")]
    {
        if let Some(config) = config {
            tracing::info!(url = %config.url, table = %config.table, "Using hosted posts table");
            return Arc::new(RestPostStore::new(config.clone()));
        }
        tracing::warn!("POSTBOARD_URL not set. Running without a hosted store (in-memory mode).");
    }

    #[cfg(not(feature = "rest"))]
    {
        if config.is_some() {
            tracing::warn!("Built without the rest feature - ignoring store URL");
        }
        tracing::info!("Using in-memory post store");
    }

    Arc::new(InMemoryPostStore::new())
}

//! # Postboard Infrastructure
//!
//! Concrete implementations of the [`PostStore`](postboard_core::ports::PostStore)
//! port defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `rest` - Hosted posts table over its REST interface via reqwest

pub mod store;

// Re-exports - In-Memory
pub use store::{ConfigError, InMemoryPostStore, RestConfig};

// Re-exports - REST
#[cfg(feature = "rest")]
pub use store::RestPostStore;

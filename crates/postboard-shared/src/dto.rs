//! Data Transfer Objects - rows and field sets sent to and read from the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row sent when inserting a post. The store fills in `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertPostRow {
    pub title: String,
    pub content: String,
}

/// Fields sent when updating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostFields {
    pub title: String,
    pub content: String,
}

/// Row returned by a select on the posts table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}

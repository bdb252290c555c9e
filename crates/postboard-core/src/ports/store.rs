use async_trait::async_trait;

use crate::domain::{Post, PostChanges, PostDraft, PostId};
use crate::error::StoreError;

/// Ordering of a full select, by `created_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    NewestFirst,
}

/// Remote store for the posts collection.
///
/// Each call is a single round trip with no retry.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post. The store assigns `id` and `created_at`.
    async fn insert(&self, draft: &PostDraft) -> Result<(), StoreError>;

    /// Fetch every post in the given order.
    async fn select_all(&self, order: SortOrder) -> Result<Vec<Post>, StoreError>;

    /// Replace title and content of the post with the given id.
    async fn update(&self, id: PostId, changes: &PostChanges) -> Result<(), StoreError>;

    /// Delete the post with the given id.
    async fn delete(&self, id: PostId) -> Result<(), StoreError>;
}

//! Error and notice types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - input rejected before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Remote store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Failed to decode store response: {0}")]
    Decode(String),

    #[error("Post not found: {0}")]
    NotFound(PostId),
}

/// User-facing notices, one per validation failure and per failed flow.
///
/// These are the blocking messages the UI shows; the underlying error is
/// logged separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Notice {
    #[error("A title is required.")]
    TitleRequired,

    #[error("The title cannot be empty.")]
    TitleEmpty,

    #[error("Failed to create the post.")]
    CreateFailed,

    #[error("Failed to load posts.")]
    LoadFailed,

    #[error("Failed to update the post.")]
    UpdateFailed,

    #[error("Failed to delete the post.")]
    DeleteFailed,

    #[error("Post {0} is not in the current list.")]
    NotListed(PostId),
}

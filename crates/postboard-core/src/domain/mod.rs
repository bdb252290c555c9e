//! Domain entities - the records the client reads and writes.

mod draft;
mod post;
pub mod search;

pub use draft::{EditRequest, PostChanges, PostDraft};
pub use post::{Post, PostId};

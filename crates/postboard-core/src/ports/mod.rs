//! Ports - trait definitions for the remote store and the UI layer.
//! These are the "interfaces" that infrastructure and front ends implement.

mod store;
mod view;

pub use store::{PostStore, SortOrder};
pub use view::{FormInput, PostsView};

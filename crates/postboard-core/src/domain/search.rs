//! Local title search over the row cache.

use super::Post;

/// Posts whose title contains `query`, ignoring case, in input order.
///
/// Content is not searched. An empty query matches every post.
pub fn filter_by_title(rows: &[Post], query: &str) -> Vec<Post> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| row.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

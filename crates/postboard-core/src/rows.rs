//! In-memory row cache - the last full snapshot fetched from the store.

use crate::domain::search::filter_by_title;
use crate::domain::{Post, PostId};

/// Most recently loaded posts, newest first.
///
/// The cache is only ever replaced as a whole, never patched.
#[derive(Debug, Clone, Default)]
pub struct RowCache {
    rows: Vec<Post>,
}

impl RowCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot.
    pub fn replace(&mut self, rows: Vec<Post>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Post] {
        &self.rows
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Rows matching a title search, without touching the snapshot.
    pub fn search(&self, query: &str) -> Vec<Post> {
        filter_by_title(&self.rows, query)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn post(id: i64, title: &str) -> Post {
        Post {
            id: PostId(id),
            title: title.to_string(),
            content: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_replace_discards_previous_rows() {
        let mut cache = RowCache::new();
        cache.replace(vec![post(1, "a"), post(2, "b")]);
        cache.replace(vec![post(3, "c")]);

        assert_eq!(cache.len(), 1);
        assert!(cache.get(PostId(1)).is_none());
        assert_eq!(cache.get(PostId(3)).unwrap().title, "c");
    }

    #[test]
    fn test_search_leaves_snapshot_intact() {
        let mut cache = RowCache::new();
        cache.replace(vec![post(1, "apple"), post(2, "banana")]);

        let found = cache.search("APP");
        assert_eq!(found.len(), 1);
        assert_eq!(cache.len(), 2);
    }
}

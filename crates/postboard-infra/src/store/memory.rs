//! In-memory post store - used when no hosted store is configured.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use postboard_core::domain::{Post, PostChanges, PostDraft, PostId};
use postboard_core::error::StoreError;
use postboard_core::ports::{PostStore, SortOrder};

struct Table {
    rows: Vec<Post>,
    next_id: i64,
    last_created: Option<DateTime<Utc>>,
}

/// In-memory posts table with store-assigned ids and timestamps.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    table: RwLock<Table>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: Vec::new(),
                next_id: 1,
                last_created: None,
            }),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    // Timestamps are kept strictly increasing so newest-first order is total.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_created {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_created = Some(stamp);
        stamp
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, draft: &PostDraft) -> Result<(), StoreError> {
        let mut table = self.table.write().await;

        let id = PostId(table.next_id);
        table.next_id += 1;
        let created_at = table.stamp();

        table.rows.push(Post {
            id,
            title: draft.title.clone(),
            content: Some(draft.content.clone()),
            created_at,
        });
        tracing::debug!(post_id = %id, "Row inserted");

        Ok(())
    }

    async fn select_all(&self, order: SortOrder) -> Result<Vec<Post>, StoreError> {
        let table = self.table.read().await;

        let mut rows = table.rows.clone();
        match order {
            SortOrder::NewestFirst => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        Ok(rows)
    }

    async fn update(&self, id: PostId, changes: &PostChanges) -> Result<(), StoreError> {
        let mut table = self.table.write().await;

        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound(id))?;
        row.title = changes.title.clone();
        row.content = Some(changes.content.clone());

        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        let mut table = self.table.write().await;

        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        if table.rows.len() == before {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

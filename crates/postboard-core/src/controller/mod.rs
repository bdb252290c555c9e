//! Posts controller - binds user actions to the store and the view.
//!
//! Every flow follows the same shape: validate locally, make at most one
//! store call, and on success reload the full list. Failures are logged and
//! turned into a [`Notice`]; the row cache is only replaced by a successful
//! load.

use std::sync::Arc;

use crate::domain::{EditRequest, PostDraft, PostId};
use crate::error::Notice;
use crate::ports::{PostStore, PostsView, SortOrder};
use crate::render::{Action, ListView, Renderer};
use crate::rows::RowCache;

/// How a flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The store call succeeded.
    Done,
    /// Stopped before any store call (validation, cancel, declined).
    Aborted,
    /// The store call failed.
    Failed,
}

/// Controller owning the row cache and the injected store and view.
///
/// Flows take `&mut self`, so a controller runs one flow at a time.
pub struct PostsController<V: PostsView> {
    store: Arc<dyn PostStore>,
    view: V,
    renderer: Renderer,
    rows: RowCache,
    rendered: ListView,
}

impl<V: PostsView> PostsController<V> {
    pub fn new(store: Arc<dyn PostStore>, view: V, renderer: Renderer) -> Self {
        Self {
            store,
            view,
            renderer,
            rows: RowCache::new(),
            rendered: ListView::default(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn rows(&self) -> &RowCache {
        &self.rows
    }

    /// The list currently on screen.
    pub fn rendered(&self) -> &ListView {
        &self.rendered
    }

    /// Fetch all posts newest first, replace the cache and redraw.
    ///
    /// On failure the cache and the displayed list are left as they were.
    pub async fn load(&mut self) -> Outcome {
        match self.store.select_all(SortOrder::NewestFirst).await {
            Ok(rows) => {
                tracing::debug!(count = rows.len(), "Posts loaded");
                self.rows.replace(rows);
                self.redraw_all();
                Outcome::Done
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load posts");
                self.view.notify(Notice::LoadFailed);
                Outcome::Failed
            }
        }
    }

    /// Clear the search field and reload.
    pub async fn refresh(&mut self) -> Outcome {
        self.view.clear_search();
        self.load().await
    }

    /// Submit the create form.
    pub async fn create(&mut self) -> Outcome {
        let input = self.view.form_input();
        let draft = match PostDraft::from_form(&input.title, &input.content) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::debug!(error = %e, "Create rejected");
                self.view.notify(Notice::TitleRequired);
                return Outcome::Aborted;
            }
        };

        if let Err(e) = self.store.insert(&draft).await {
            tracing::error!(error = %e, "Failed to create post");
            self.view.notify(Notice::CreateFailed);
            return Outcome::Failed;
        }

        tracing::info!(title = %draft.title, "Post created");
        self.view.clear_form();
        self.load().await;
        Outcome::Done
    }

    /// Ask the view for new values for a cached post, then update it.
    pub async fn edit(&mut self, id: PostId) -> Outcome {
        let Some(post) = self.rows.get(id).cloned() else {
            self.view.notify(Notice::NotListed(id));
            return Outcome::Aborted;
        };

        let request = self.view.request_edit(&post);
        self.update(id, request).await
    }

    /// Apply an edit request to the post with the given id.
    pub async fn update(&mut self, id: PostId, request: EditRequest) -> Outcome {
        let changes = match request.into_changes() {
            Ok(Some(changes)) => changes,
            Ok(None) => {
                tracing::debug!(post_id = %id, "Edit cancelled");
                return Outcome::Aborted;
            }
            Err(e) => {
                tracing::debug!(post_id = %id, error = %e, "Edit rejected");
                self.view.notify(Notice::TitleEmpty);
                return Outcome::Aborted;
            }
        };

        if let Err(e) = self.store.update(id, &changes).await {
            tracing::error!(post_id = %id, error = %e, "Failed to update post");
            self.view.notify(Notice::UpdateFailed);
            return Outcome::Failed;
        }

        tracing::info!(post_id = %id, "Post updated");
        self.load().await;
        Outcome::Done
    }

    /// Delete a post after the user confirms.
    pub async fn delete(&mut self, id: PostId) -> Outcome {
        if !self.view.confirm(&format!("Really delete post {id}?")) {
            tracing::debug!(post_id = %id, "Delete declined");
            return Outcome::Aborted;
        }

        if let Err(e) = self.store.delete(id).await {
            tracing::error!(post_id = %id, error = %e, "Failed to delete post");
            self.view.notify(Notice::DeleteFailed);
            return Outcome::Failed;
        }

        tracing::info!(post_id = %id, "Post deleted");
        self.load().await;
        Outcome::Done
    }

    /// Show only cached posts whose title contains `query`.
    pub fn search(&mut self, query: &str) {
        let matches = self.rows.search(query);
        let list = self.renderer.render(&matches);
        self.redraw(list);
    }

    /// Run the flow bound to a control on the current list.
    pub async fn dispatch(&mut self, action: Action) -> Outcome {
        let id = action.post_id();
        if !self.rendered.contains(id) {
            self.view.notify(Notice::NotListed(id));
            return Outcome::Aborted;
        }

        match action {
            Action::Edit(id) => self.edit(id).await,
            Action::Delete(id) => self.delete(id).await,
        }
    }

    fn redraw_all(&mut self) {
        let list = self.renderer.render(self.rows.rows());
        self.redraw(list);
    }

    fn redraw(&mut self, list: ListView) {
        self.view.show_list(&list);
        self.rendered = list;
    }
}

//! Hosted posts table over its REST interface (PostgREST / Supabase).
//!
//! Each port call is exactly one HTTP request. There is no retry and no
//! client-side timeout; failures are mapped to [`StoreError`] and left to
//! the controller to report.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::Instrument;
use uuid::Uuid;

use postboard_core::domain::{Post, PostChanges, PostDraft, PostId};
use postboard_core::error::StoreError;
use postboard_core::ports::{PostStore, SortOrder};
use postboard_shared::ApiErrorBody;
use postboard_shared::dto::{InsertPostRow, PostRow, UpdatePostFields};

use super::RestConfig;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: &str = "X-Request-ID";

/// REST client for the posts table.
pub struct RestPostStore {
    client: Client,
    config: RestConfig,
}

impl RestPostStore {
    pub fn new(config: RestConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: RestConfig) -> Self {
        Self { client, config }
    }

    fn table_url(&self) -> String {
        table_url(&self.config)
    }

    /// Start a request with the auth and request-id headers set.
    fn request(&self, method: Method, request_id: Uuid) -> RequestBuilder {
        self.client
            .request(method, self.table_url())
            .header("apikey", self.config.api_key.as_str())
            .bearer_auth(&self.config.api_key)
            .header(REQUEST_ID_HEADER, request_id.to_string())
    }

    fn insert_request(&self, draft: &PostDraft, request_id: Uuid) -> RequestBuilder {
        let rows = [InsertPostRow {
            title: draft.title.clone(),
            content: draft.content.clone(),
        }];

        self.request(Method::POST, request_id)
            .header("Prefer", "return=minimal")
            .json(&rows)
    }

    fn select_request(&self, order: SortOrder, request_id: Uuid) -> RequestBuilder {
        self.request(Method::GET, request_id)
            .query(&[("select", "*"), ("order", order_param(order))])
    }

    fn update_request(&self, id: PostId, changes: &PostChanges, request_id: Uuid) -> RequestBuilder {
        let fields = UpdatePostFields {
            title: changes.title.clone(),
            content: changes.content.clone(),
        };

        self.request(Method::PATCH, request_id)
            .query(&[("id", id_filter(id))])
            .json(&fields)
    }

    fn delete_request(&self, id: PostId, request_id: Uuid) -> RequestBuilder {
        self.request(Method::DELETE, request_id)
            .query(&[("id", id_filter(id))])
    }

    /// Send a request and turn non-success statuses into `Rejected`.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, StoreError> {
        let response = builder
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "Store request succeeded");
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body = ApiErrorBody::from_text(&text);
        tracing::warn!(status = status.as_u16(), error = %body, "Store rejected request");

        Err(StoreError::Rejected {
            status: status.as_u16(),
            message: body.to_string(),
        })
    }
}

/// `{url}/rest/v1/{table}`.
fn table_url(config: &RestConfig) -> String {
    format!(
        "{}/rest/v1/{}",
        config.url.trim_end_matches('/'),
        config.table
    )
}

fn order_param(order: SortOrder) -> &'static str {
    match order {
        SortOrder::NewestFirst => "created_at.desc",
    }
}

fn id_filter(id: PostId) -> String {
    format!("eq.{id}")
}

/// Decode a select body. A `null` body is an empty result.
fn decode_rows(text: &str) -> Result<Vec<Post>, StoreError> {
    let rows: Option<Vec<PostRow>> =
        serde_json::from_str(text).map_err(|e| StoreError::Decode(e.to_string()))?;

    Ok(rows.unwrap_or_default().into_iter().map(into_post).collect())
}

fn into_post(row: PostRow) -> Post {
    Post {
        id: PostId(row.id),
        title: row.title,
        content: row.content,
        created_at: row.created_at,
    }
}

fn span(op: &'static str, request_id: Uuid) -> tracing::Span {
    tracing::info_span!("store_request", op, request_id = %request_id)
}

#[async_trait]
impl PostStore for RestPostStore {
    async fn insert(&self, draft: &PostDraft) -> Result<(), StoreError> {
        let request_id = Uuid::new_v4();
        let builder = self.insert_request(draft, request_id);

        self.send(builder).instrument(span("insert", request_id)).await?;
        Ok(())
    }

    async fn select_all(&self, order: SortOrder) -> Result<Vec<Post>, StoreError> {
        let request_id = Uuid::new_v4();
        let builder = self.select_request(order, request_id);

        async {
            let response = self.send(builder).await?;
            let text = response
                .text()
                .await
                .map_err(|e| StoreError::Connection(e.to_string()))?;
            decode_rows(&text)
        }
        .instrument(span("select", request_id))
        .await
    }

    async fn update(&self, id: PostId, changes: &PostChanges) -> Result<(), StoreError> {
        let request_id = Uuid::new_v4();
        let builder = self.update_request(id, changes, request_id);

        self.send(builder).instrument(span("update", request_id)).await?;
        Ok(())
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        let request_id = Uuid::new_v4();
        let builder = self.delete_request(id, request_id);

        self.send(builder).instrument(span("delete", request_id)).await?;
        Ok(())
    }
}

//! Render engine - turns a row list into the list view shown to the user.
//!
//! Rendering is pure: the same rows always produce the same [`ListView`],
//! and a view replaces whatever was shown before it.

mod escape;
mod html;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

use crate::domain::{Post, PostId};

pub use escape::escape_html;

/// Control attached to a rendered post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Edit(PostId),
    Delete(PostId),
}

impl Action {
    pub fn post_id(&self) -> PostId {
        match self {
            Action::Edit(id) | Action::Delete(id) => *id,
        }
    }
}

/// A button on a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub label: &'static str,
    pub class: &'static str,
    pub action: Action,
}

/// One rendered post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: PostId,
    /// Title as entered, for text-only front ends.
    pub title: String,
    /// Escaped title inside its bold wrapper.
    pub title_markup: String,
    /// Content as plain text; never interpreted as markup.
    pub content: String,
    /// `ID: {id} · {created_at}`.
    pub meta: String,
    pub actions: Vec<ActionView>,
}

/// The rendered list plus the empty-state flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub items: Vec<ItemView>,
    pub empty_state_visible: bool,
}

impl ListView {
    /// Whether a control for `id` is currently shown.
    pub fn contains(&self, id: PostId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Serialise the view to HTML markup.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timezone dates are displayed in.
///
/// The offset is looked up per instant, so dates on either side of a
/// daylight-saving change each get their own offset.
pub trait DisplayZone: fmt::Debug + Send + Sync {
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset;
}

impl DisplayZone for Local {
    fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        *instant.with_timezone(self).offset()
    }
}

impl DisplayZone for Utc {
    fn offset_at(&self, _instant: &DateTime<Utc>) -> FixedOffset {
        self.fix()
    }
}

impl DisplayZone for FixedOffset {
    fn offset_at(&self, _instant: &DateTime<Utc>) -> FixedOffset {
        *self
    }
}

/// Render engine with a chosen display timezone.
#[derive(Debug, Clone)]
pub struct Renderer {
    zone: Arc<dyn DisplayZone>,
}

impl Renderer {
    /// Renderer that shows dates in `zone`.
    pub fn with_zone(zone: impl DisplayZone + 'static) -> Self {
        Self {
            zone: Arc::new(zone),
        }
    }

    /// Renderer that shows dates in a fixed offset.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self::with_zone(offset)
    }

    /// Renderer that shows dates in the machine's local timezone.
    pub fn local() -> Self {
        Self::with_zone(Local)
    }

    pub fn utc() -> Self {
        Self::with_zone(Utc)
    }

    /// Render `rows` in order.
    pub fn render(&self, rows: &[Post]) -> ListView {
        if rows.is_empty() {
            return ListView {
                items: Vec::new(),
                empty_state_visible: true,
            };
        }

        ListView {
            items: rows.iter().map(|row| self.render_item(row)).collect(),
            empty_state_visible: false,
        }
    }

    fn render_item(&self, row: &Post) -> ItemView {
        let offset = self.zone.offset_at(&row.created_at);
        let created = row.created_at.with_timezone(&offset).format(DATE_FORMAT);

        ItemView {
            id: row.id,
            title: row.title.clone(),
            title_markup: format!("<strong>{}</strong>", escape_html(&row.title)),
            content: row.content().to_string(),
            meta: format!("ID: {} · {}", row.id, created),
            actions: vec![
                ActionView {
                    label: "edit",
                    class: "secondary",
                    action: Action::Edit(row.id),
                },
                ActionView {
                    label: "delete",
                    class: "danger",
                    action: Action::Delete(row.id),
                },
            ],
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::local()
    }
}

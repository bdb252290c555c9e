//! HTML serialisation of a rendered list.

use std::fmt;

use super::{ItemView, ListView, escape_html};

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<ul id="postsList">"#)?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        writeln!(f, "</ul>")?;

        let class = if self.empty_state_visible { "" } else { r#" class="hidden""# };
        write!(f, r#"<p id="emptyState"{class}>No posts yet.</p>"#)
    }
}

impl fmt::Display for ItemView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Content and meta are text nodes, so they are escaped on the way out.
        write!(
            f,
            r#"<li class="item"><div><div>{}</div><div>{}</div><div class="meta">{}</div></div><div class="actions">"#,
            self.title_markup,
            escape_html(&self.content),
            escape_html(&self.meta),
        )?;
        for button in &self.actions {
            write!(
                f,
                r#"<button class="{}" data-action="{}" data-id="{}">{}</button>"#,
                button.class,
                button.label,
                button.action.post_id(),
                button.label,
            )?;
        }
        write!(f, "</div></li>")
    }
}

use crate::error::DomainError;

/// Validated input for the create flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

impl PostDraft {
    /// Build a draft from raw form input.
    ///
    /// Both fields are trimmed; a title that trims to nothing is rejected.
    pub fn from_form(title: &str, content: &str) -> Result<Self, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.trim().to_string(),
        })
    }
}

/// Validated fields for the update flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
}

/// Edit request produced by the UI layer for one post.
///
/// A `None` field means the user cancelled at that field, which cancels
/// the whole edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl EditRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    pub fn cancelled() -> Self {
        Self::default()
    }

    /// Validate the request.
    ///
    /// Returns `Ok(None)` when the edit was cancelled. The title is trimmed,
    /// the content is kept exactly as entered.
    pub fn into_changes(self) -> Result<Option<PostChanges>, DomainError> {
        let (Some(title), Some(content)) = (self.title, self.content) else {
            return Ok(None);
        };

        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".to_string()));
        }

        Ok(Some(PostChanges {
            title: title.to_string(),
            content,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_trims_fields() {
        let draft = PostDraft::from_form("  A title ", " body \n").unwrap();
        assert_eq!(draft.title, "A title");
        assert_eq!(draft.content, "body");
    }

    #[test]
    fn test_draft_rejects_blank_title() {
        assert!(PostDraft::from_form("   \t", "content").is_err());
        assert!(PostDraft::from_form("", "").is_err());
    }

    #[test]
    fn test_draft_allows_empty_content() {
        let draft = PostDraft::from_form("t", "").unwrap();
        assert_eq!(draft.content, "");
    }

    #[test]
    fn test_edit_keeps_content_untrimmed() {
        let changes = EditRequest::new(" Y ", "  Z  ").into_changes().unwrap().unwrap();
        assert_eq!(changes.title, "Y");
        assert_eq!(changes.content, "  Z  ");
    }

    #[test]
    fn test_edit_cancelled_at_either_field() {
        let at_title = EditRequest {
            title: None,
            content: Some("c".to_string()),
        };
        let at_content = EditRequest {
            title: Some("t".to_string()),
            content: None,
        };

        assert_eq!(at_title.into_changes().unwrap(), None);
        assert_eq!(at_content.into_changes().unwrap(), None);
        assert_eq!(EditRequest::cancelled().into_changes().unwrap(), None);
    }

    #[test]
    fn test_edit_rejects_blank_title() {
        let err = EditRequest::new("  ", "c").into_changes().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}

//! Error body returned by the hosted store on a failed request.

use std::fmt;

use serde::{Deserialize, Serialize};

/// PostgREST-style error payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,

    /// Service or database error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ApiErrorBody {
    /// Parse an error body, falling back to the raw text when it is not JSON.
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_else(|_| Self {
            message: text.trim().to_string(),
            ..Self::default()
        })
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = if self.message.is_empty() {
            "unknown error"
        } else {
            &self.message
        };
        match &self.code {
            Some(code) => write!(f, "{message} [{code}]")?,
            None => write!(f, "{message}")?,
        }
        if let Some(details) = &self.details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_json_error() {
        let body = ApiErrorBody::from_text(
            r#"{"message":"permission denied for table posts","code":"42501","details":null,"hint":null}"#,
        );
        assert_eq!(body.code.as_deref(), Some("42501"));
        assert_eq!(body.to_string(), "permission denied for table posts [42501]");
    }

    #[test]
    fn test_falls_back_to_raw_text() {
        let body = ApiErrorBody::from_text("Bad Gateway\n");
        assert_eq!(body.message, "Bad Gateway");
        assert_eq!(body.to_string(), "Bad Gateway");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(ApiErrorBody::from_text("").to_string(), "unknown error");
    }
}

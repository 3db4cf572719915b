use serde_json::Value;
use thiserror::Error;

/// Failure taxonomy for API calls. Services propagate these untouched;
/// the calling view owns presentation and loading-flag reset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthorized,
    #[error("access denied")]
    Forbidden,
    /// Business-rule rejection. The server's message is passed through
    /// verbatim.
    #[error("{0}")]
    Domain(String),
    #[error("request failed with status {0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            400 | 409 => {
                let message = body
                    .and_then(extract_error_message)
                    .unwrap_or_else(|| "Request rejected".to_string());
                Self::Domain(message)
            }
            status => Self::Http(status),
        }
    }

    /// Text for the user-facing failure banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            Self::Forbidden => "You do not have permission to do that.".to_string(),
            Self::Domain(message) => message.clone(),
            Self::Network(_) => "The server could not be reached. Please try again.".to_string(),
            Self::Http(_) | Self::Decode(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

/// Pull a human-readable message out of the server's error body. The API
/// emits `{"error": ..}` for business-rule rejections, `{"detail": ..}`
/// for framework-level ones, and `{"<field>": ["msg", ..]}` for
/// validation failures.
pub fn extract_error_message(body: &Value) -> Option<String> {
    let object = body.as_object()?;
    for key in ["error", "detail", "message"] {
        if let Some(text) = object.get(key).and_then(Value::as_str) {
            return Some(text.to_string());
        }
    }
    object.iter().find_map(|(field, value)| {
        let text = match value {
            Value::String(text) => Some(text.clone()),
            Value::Array(items) => items.first().and_then(Value::as_str).map(String::from),
            _ => None,
        }?;
        Some(format!("{}: {}", field, text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_key_wins_over_field_errors() {
        let body = json!({ "error": "No copies available", "book_id": ["busy"] });
        assert_eq!(
            extract_error_message(&body),
            Some("No copies available".to_string())
        );
    }

    #[test]
    fn detail_is_used_when_no_error_key() {
        let body = json!({ "detail": "Not found." });
        assert_eq!(extract_error_message(&body), Some("Not found.".to_string()));
    }

    #[test]
    fn field_errors_are_flattened_to_field_and_first_message() {
        let body = json!({ "username": ["A user with that username already exists."] });
        assert_eq!(
            extract_error_message(&body),
            Some("username: A user with that username already exists.".to_string())
        );
    }

    #[test]
    fn non_object_bodies_have_no_message() {
        assert_eq!(extract_error_message(&json!("oops")), None);
        assert_eq!(extract_error_message(&json!(["oops"])), None);
    }

    #[test]
    fn conflict_statuses_become_domain_errors_with_verbatim_text() {
        let body = json!({ "error": "You have already borrowed this book" });
        assert_eq!(
            ApiError::from_status(400, Some(&body)),
            ApiError::Domain("You have already borrowed this book".to_string())
        );
        assert_eq!(
            ApiError::from_status(409, None),
            ApiError::Domain("Request rejected".to_string())
        );
    }

    #[test]
    fn auth_statuses_map_to_their_variants() {
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, None), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(500, None), ApiError::Http(500));
    }
}

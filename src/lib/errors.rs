//! Error type shared by the session store, feature clients and routes. Every
//! variant carries a message that is safe to render; `user_message` picks the
//! text a screen should show.

use serde_json::Value;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Shown when a transient failure carries nothing useful for the user.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Local input problem detected before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// The backend answered successfully but declined the operation.
    #[error("{0}")]
    Rejected(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Message for inline display next to the action that failed.
    ///
    /// Client errors from the backend (bad credentials, expired code) are shown
    /// as returned. Server and transport failures fall back to a generic text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Rejected(message) => message.clone(),
            Self::Http { status, message } if (400..500).contains(status) => message.clone(),
            Self::Timeout(message) => message.clone(),
            Self::Network(_) => "Unable to reach the server. Please try again.".to_string(),
            Self::Http { .. } | Self::Config(_) | Self::Parse(_) | Self::Serialization(_) => {
                GENERIC_FAILURE.to_string()
            }
        }
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Extracts a displayable message from an HTTP error body.
///
/// JSON bodies with a `message` or `error` string field use that field; any
/// other body is used as text. The result is trimmed and truncated.
#[must_use]
pub fn message_from_body(body: &str) -> String {
    let trimmed = body.trim();
    let message = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(fields)) => ["message", "error"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .unwrap_or(trimmed)
            .to_string(),
        _ => trimmed.to_string(),
    };

    if message.is_empty() {
        "Request failed.".to_string()
    } else {
        message.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_surface_backend_message() {
        let err = AppError::Http {
            status: 401,
            message: "Invalid email or password.".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid email or password.");
    }

    #[test]
    fn server_and_transport_errors_use_fallback() {
        let err = AppError::Http {
            status: 502,
            message: "upstream exploded".to_string(),
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE);
        assert_eq!(
            AppError::Parse("bad json".to_string()).user_message(),
            GENERIC_FAILURE
        );
        assert_ne!(
            AppError::Network("dns".to_string()).user_message(),
            "dns".to_string()
        );
    }

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = AppError::validation("Email is required.");
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Email is required.");
        assert_eq!(err.to_string(), "Email is required.");
    }

    #[test]
    fn message_from_body_prefers_json_fields() {
        assert_eq!(
            message_from_body(r#"{"message":" Code expired "}"#),
            "Code expired"
        );
        assert_eq!(message_from_body(r#"{"error":"Unknown account"}"#), "Unknown account");
        assert_eq!(message_from_body("  plain text  "), "plain text");
        assert_eq!(message_from_body("   "), "Request failed.");
    }

    #[test]
    fn message_from_body_truncates_long_bodies() {
        let body = "x".repeat(500);
        assert_eq!(message_from_body(&body).chars().count(), MAX_ERROR_CHARS);
    }
}

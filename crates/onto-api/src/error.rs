//! Error types for the catalog API client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`].
///
/// The `Display` form is always a human-readable message suitable for
/// rendering inline in the UI; for non-success responses it carries the
/// server's `detail` normalized by [`normalize_error_body`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Transport failure: DNS, connect, TLS, or timeout.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status with a normalized error message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Success response whose body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// 204 No Content where a body was required.
    #[error("empty response body")]
    EmptyBody,
}

impl ApiError {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Fold an error response body into a single message.
///
/// The catalog emits FastAPI-style bodies: `detail` is a plain string, or an
/// array of strings / `{msg, type}` objects. Anything else renders as the
/// raw JSON payload, and an unparseable body falls back to
/// `"{status} {reason}"`.
pub(crate) fn normalize_error_body(status: StatusCode, body: &[u8]) -> String {
    let Ok(payload) = serde_json::from_slice::<serde_json::Value>(body) else {
        return status_line(status);
    };

    match payload.get("detail") {
        Some(serde_json::Value::String(detail)) => detail.clone(),
        Some(serde_json::Value::Array(entries)) => entries
            .iter()
            .map(|entry| match entry {
                serde_json::Value::String(text) => text.as_str(),
                serde_json::Value::Object(fields) => fields
                    .get("msg")
                    .and_then(serde_json::Value::as_str)
                    .or_else(|| fields.get("type").and_then(serde_json::Value::as_str))
                    .unwrap_or("Unknown error"),
                _ => "Unknown error",
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => payload.to_string(),
    }
}

fn status_line(status: StatusCode) -> String {
    format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_used_verbatim() {
        let body = br#"{"detail":"Topic X not found"}"#;
        assert_eq!(
            normalize_error_body(StatusCode::NOT_FOUND, body),
            "Topic X not found"
        );
    }

    #[test]
    fn array_detail_joins_msg_then_type() {
        let body = br#"{"detail":[{"msg":"bad value"},{"type":"missing"}]}"#;
        assert_eq!(
            normalize_error_body(StatusCode::UNPROCESSABLE_ENTITY, body),
            "bad value, missing"
        );
    }

    #[test]
    fn string_entries_and_unknown_entries_are_handled() {
        let body = br#"{"detail":["first failure",42]}"#;
        assert_eq!(
            normalize_error_body(StatusCode::BAD_REQUEST, body),
            "first failure, Unknown error"
        );
    }

    #[test]
    fn other_shapes_render_as_raw_json() {
        let body = br#"{"error":"boom"}"#;
        assert_eq!(
            normalize_error_body(StatusCode::INTERNAL_SERVER_ERROR, body),
            r#"{"error":"boom"}"#
        );
    }

    #[test]
    fn unparseable_body_falls_back_to_status_line() {
        let body = b"<html>gateway timeout</html>";
        assert_eq!(
            normalize_error_body(StatusCode::BAD_GATEWAY, body),
            "502 Bad Gateway"
        );
    }

    #[test]
    fn display_carries_the_message() {
        let error = ApiError::Api {
            status: 404,
            message: "Topic X not found".to_string(),
        };
        assert_eq!(error.to_string(), "Topic X not found");
        assert_eq!(error.status(), Some(404));
    }
}

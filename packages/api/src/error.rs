//! Error types for the REST client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by [`crate::ApiClient`].
///
/// `Unauthorized` and `NotFound` get their own variants because callers react
/// to them: a 401 ends the session, a 404 renders a "not found" state.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    /// HTTP 401; the bearer token is missing, expired, or revoked.
    #[error("Unauthorized")]
    Unauthorized,

    /// HTTP 404 for the requested record.
    #[error("Not found")]
    NotFound,

    /// Any other non-2xx response, with the server's error message when the
    /// body carried one.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Transport failure: connection refused, DNS, timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Message extraction for error responses. The backend wraps errors as
    /// `{"error": "..."}`; anything else falls back to the status reason.
    pub(crate) fn from_response(status: u16, body: &str) -> ApiError {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        ApiError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extracted_from_error_body() {
        let err = ApiError::from_response(500, r#"{"error": "pq: connection refused"}"#);
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "pq: connection refused");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_falls_back_to_status() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_json_without_error_key_falls_back() {
        let err = ApiError::from_response(400, r#"{"detail": "nope"}"#);
        assert_eq!(err.to_string(), "Request failed with status 400");
    }
}

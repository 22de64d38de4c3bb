//! API error types.
//!
//! Every failure surfaced by the HTTP client core is one of these variants.
//!
//! # Error Categories
//!
//! - `AuthenticationRequired` - the server answered 401; the current bearer
//!   token is no longer accepted
//! - `Http` - any other non-2xx status, with the best-effort message the
//!   server provided
//! - `MalformedResponse` - the server claimed success but the response was
//!   missing required fields
//! - `Network` - the request never completed (connection refused, DNS, TLS)
//! - `Serialization` - a response body could not be decoded as the expected
//!   JSON shape
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread
//! boundaries.

use thiserror::Error;

/// Failures produced by the HTTP client core and the API surfaces above it.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// The server answered 401 Unauthorized. Terminal for the current
    /// operation; the policy layer reacts by clearing the stored token and
    /// redirecting to the login entry point.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Any other non-2xx response.
    #[error("{message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body, or `HTTP <status>`
        message: String,
    },

    /// `success` was true but a required field was absent.
    #[error("invalid response: {0}")]
    MalformedResponse(String),

    /// The request did not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// A response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Create an `Http` error with the generic `HTTP <status>` message.
    pub fn http_status(status: u16) -> Self {
        Self::Http {
            status,
            message: format!("HTTP {}", status),
        }
    }

    /// Status code carried by this error, if it came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationRequired => Some(401),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // Timeouts share the HTTP taxonomy rather than getting a
            // dedicated variant.
            Self::Http {
                status: 408,
                message: "request timed out".to_string(),
            }
        } else if err.is_decode() {
            Self::Serialization(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_fallback_message() {
        let error = ApiError::http_status(500);
        match error {
            ApiError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "HTTP 500");
            }
            _ => panic!("Expected Http error"),
        }
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(ApiError::AuthenticationRequired.status(), Some(401));
        assert_eq!(ApiError::http_status(404).status(), Some(404));
        assert_eq!(ApiError::Network("down".to_string()).status(), None);
    }

    #[test]
    fn test_malformed_display_contains_invalid_response() {
        let error = ApiError::MalformedResponse("login succeeded without credentials".to_string());
        assert!(format!("{}", error).contains("invalid response"));
    }

    #[test]
    fn test_http_display_is_server_message() {
        let error = ApiError::Http {
            status: 400,
            message: "Email already registered".to_string(),
        };
        assert_eq!(format!("{}", error), "Email already registered");
    }

    #[test]
    fn test_from_serde_error() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ nope");
        let error: ApiError = result.unwrap_err().into();
        match error {
            ApiError::Serialization(_) => {}
            _ => panic!("Expected Serialization error"),
        }
    }
}

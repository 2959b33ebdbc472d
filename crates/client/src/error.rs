//! Error types for the API client.
//!
//! All failures surface at the call site; nothing escapes to a global
//! handler and nothing is fatal. A failed call leaves the caller's state
//! exactly as it was.
//!
//! # Taxonomy
//!
//! | Variant | Origin | Network call made? |
//! |---------|--------|--------------------|
//! | `Validation` | Local required-field check | No |
//! | `Attachment` | Local attachment policy | No |
//! | `Config` | Bad client configuration | No |
//! | `Transport` | Connection/IO failure | Attempted |
//! | `Server` | Non-2xx response | Yes |
//! | `Decode` | Malformed success body | Yes |
//!
//! An empty collection is NOT an error anywhere in this crate; a successful
//! read with zero records is an ordinary result.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use gymdesk_model::ValidationError;

/// The primary error type for all API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A draft failed its local required-field checks. Never preceded by a
    /// network call and never logged remotely.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An attachment violated the client-side upload policy. The offending
    /// file was not added to any outgoing payload.
    #[error("attachment '{name}' rejected: {reason}")]
    Attachment { name: String, reason: String },

    /// The client configuration is unusable (bad base URL, zero timeout).
    #[error("invalid client configuration: {message}")]
    Config { message: String },

    /// The request never produced a response (connection refused, DNS
    /// failure, connect timeout).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `message` carries the
    /// structured `{"message": ...}` payload verbatim when one was present.
    #[error("server rejected the request (status {status})")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// A 2xx response carried a body this client could not decode.
    #[error("malformed response body: {detail}")]
    Decode { detail: String },
}

impl ApiError {
    /// The human-readable text a screen should surface for this failure.
    ///
    /// Server-provided messages are preferred verbatim; everything else
    /// falls back to a generic string. Field-level validation messages pass
    /// through unchanged so a form can display them next to the control.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(err) => err.to_string(),
            ApiError::Attachment { name, reason } => {
                format!("{name}: {reason}")
            }
            ApiError::Config { message } => message.clone(),
            ApiError::Transport(_) => {
                "Unable to reach the server. Please try again.".to_string()
            }
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Server { status, .. } => {
                format!("Request failed with status {status}")
            }
            ApiError::Decode { .. } => {
                "The server returned an unexpected response.".to_string()
            }
        }
    }

    /// True if this failure happened before any request was issued.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ApiError::Validation(_) | ApiError::Attachment { .. } | ApiError::Config { .. }
        )
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_surfaced_verbatim() {
        let err = ApiError::Server {
            status: 401,
            message: Some("Unauthorized".to_string()),
        };
        assert_eq!(err.user_message(), "Unauthorized");
    }

    #[test]
    fn test_server_without_message_uses_fallback() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Request failed with status 500");
    }

    #[test]
    fn test_validation_is_local() {
        let err = ApiError::Validation(ValidationError::MissingField { field: "code" });
        assert!(err.is_local());
        assert_eq!(err.user_message(), "code is required");
    }

    #[test]
    fn test_decode_uses_generic_text() {
        let err = ApiError::Decode {
            detail: "expected value at line 1".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "The server returned an unexpected response."
        );
    }
}

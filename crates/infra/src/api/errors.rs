//! API-specific error types
//!
//! Every client call returns [`ApiError`]. Errors are never retried or
//! swallowed inside the client; [`ApiError::category`] groups them the way
//! callers usually need to react.

use std::time::Duration;

use logto_domain::LogtoError;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

/// Broad classes of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Missing or invalid client configuration
    Configuration,
    /// Caller supplied an argument that can never produce a valid request
    Validation,
    /// Network failure, timeout or cancellation
    Transport,
    /// Remote answered outside the agreed contract
    Protocol,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} should not be empty")]
    EmptyId(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Operation cancelled")]
    Cancelled,

    #[error(
        "got status code {status}, expected status code in {expected:?}{}",
        body_suffix(.body)
    )]
    UnexpectedStatus {
        status: StatusCode,
        expected: Vec<u16>,
        /// Response body, read only for statuses of 400 and above.
        body: Option<String>,
        headers: HeaderMap,
    },

    #[error("unexpected token type {actual:?}, expected {expected:?}")]
    UnexpectedTokenType { actual: String, expected: &'static str },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref().map(|text| format!(": {text}")).unwrap_or_default()
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Config(_) => ApiErrorCategory::Configuration,
            Self::EmptyId(_) | Self::InvalidInput(_) | Self::Encode(_) => {
                ApiErrorCategory::Validation
            }
            Self::Network(_) | Self::Timeout(_) | Self::Cancelled => ApiErrorCategory::Transport,
            Self::UnexpectedStatus { .. } | Self::UnexpectedTokenType { .. } | Self::Decode(_) => {
                ApiErrorCategory::Protocol
            }
        }
    }

    /// HTTP status of a contract violation, if this is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<LogtoError> for ApiError {
    fn from(err: LogtoError) -> Self {
        let LogtoError::Config(message) = err;
        Self::Config(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(
            ApiError::Config("test".to_string()).category(),
            ApiErrorCategory::Configuration
        );
        assert_eq!(ApiError::EmptyId("id").category(), ApiErrorCategory::Validation);
        assert_eq!(ApiError::Cancelled.category(), ApiErrorCategory::Transport);
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(60)).category(),
            ApiErrorCategory::Transport
        );
        assert_eq!(
            ApiError::UnexpectedTokenType { actual: "MAC".into(), expected: "Bearer" }.category(),
            ApiErrorCategory::Protocol
        );
        assert_eq!(ApiError::Decode("eof".to_string()).category(), ApiErrorCategory::Protocol);
    }

    #[test]
    fn test_empty_id_message() {
        assert_eq!(ApiError::EmptyId("id").to_string(), "id should not be empty");
    }

    #[test]
    fn test_unexpected_status_message_with_body() {
        let err = ApiError::UnexpectedStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            expected: vec![200, 404],
            body: Some("boom".to_string()),
            headers: HeaderMap::new(),
        };

        assert_eq!(
            err.to_string(),
            "got status code 500 Internal Server Error, expected status code in [200, 404]: boom"
        );
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_unexpected_status_message_without_body() {
        let err = ApiError::UnexpectedStatus {
            status: StatusCode::FOUND,
            expected: vec![204],
            body: None,
            headers: HeaderMap::new(),
        };

        assert_eq!(err.to_string(), "got status code 302 Found, expected status code in [204]");
    }

    #[test]
    fn test_from_domain_error() {
        let err: ApiError = LogtoError::Config("missing Logto hostname".into()).into();
        assert!(matches!(err, ApiError::Config(msg) if msg == "missing Logto hostname"));
    }
}

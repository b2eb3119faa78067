//! Error types used by configuration resolution

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the domain crate
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LogtoError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, LogtoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LogtoError::Config("missing Logto hostname".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing Logto hostname");
    }

    #[test]
    fn test_error_serializes_tagged() {
        let err = LogtoError::Config("bad".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "Config", "message": "bad" }));
    }
}

//! Client configuration structures
//!
//! [`LogtoSettings`] is the loose, partially-filled shape read from files or
//! supplied by callers. [`LogtoConfig`] is the validated result the client is
//! constructed from; once built it never changes.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SCHEME, DEFAULT_TIMEOUT};
use crate::errors::{LogtoError, Result};

/// Settings as supplied by a caller or a config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogtoSettings {
    pub hostname: Option<String>,
    pub scheme: Option<String>,
    /// Audience requested during the token exchange.
    pub resource: Option<String>,
    pub application_id: Option<String>,
    pub application_secret: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Machine-to-machine credentials used for the client-credentials exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub hostname: String,
    pub resource: String,
    pub application_id: String,
    pub application_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("hostname", &self.hostname)
            .field("resource", &self.resource)
            .field("application_id", &self.application_id)
            .field("application_secret", &"[REDACTED]")
            .finish()
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogtoConfig {
    pub credentials: Credentials,
    pub scheme: String,
    pub timeout: Duration,
}

impl LogtoConfig {
    /// Build a configuration from the three required values.
    ///
    /// The resource defaults to `https://<hostname>/api`, the scheme to
    /// `https` and the timeout to 60 seconds.
    ///
    /// # Errors
    /// Returns `LogtoError::Config` when any required value is empty.
    pub fn new(
        hostname: impl Into<String>,
        application_id: impl Into<String>,
        application_secret: impl Into<String>,
    ) -> Result<Self> {
        let hostname = normalize_hostname(&hostname.into());
        let config = Self {
            credentials: Credentials {
                resource: default_resource(&hostname),
                hostname,
                application_id: application_id.into(),
                application_secret: application_secret.into(),
            },
            scheme: DEFAULT_SCHEME.to_string(),
            timeout: DEFAULT_TIMEOUT,
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the audience requested during the token exchange.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.credentials.resource = resource.into();
        self
    }

    /// Override the URL scheme. Only `http` and `https` pass validation.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check every invariant the client relies on.
    ///
    /// # Errors
    /// Returns `LogtoError::Config` describing the first violation found.
    pub fn validate(&self) -> Result<()> {
        let credentials = &self.credentials;
        if credentials.hostname.is_empty() {
            return Err(LogtoError::Config("missing Logto hostname".into()));
        }
        if credentials.hostname.contains('/') {
            return Err(LogtoError::Config(format!(
                "hostname must not contain a path: {}",
                credentials.hostname
            )));
        }
        if credentials.resource.is_empty() {
            return Err(LogtoError::Config("missing Logto resource".into()));
        }
        if credentials.application_id.is_empty() {
            return Err(LogtoError::Config("missing Logto application id".into()));
        }
        if credentials.application_secret.is_empty() {
            return Err(LogtoError::Config("missing Logto application secret".into()));
        }
        if !matches!(self.scheme.as_str(), "http" | "https") {
            return Err(LogtoError::Config(format!("unsupported scheme: {}", self.scheme)));
        }
        if self.timeout.is_zero() {
            return Err(LogtoError::Config("timeout must be greater than zero".into()));
        }
        Ok(())
    }

    /// Root every request path is joined onto, always ending with `/`.
    pub fn base_url(&self) -> String {
        format!("{}://{}/", self.scheme, self.credentials.hostname)
    }
}

/// Audience used when none is configured.
pub fn default_resource(hostname: &str) -> String {
    format!("https://{hostname}/api")
}

fn normalize_hostname(hostname: &str) -> String {
    hostname.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = LogtoConfig::new("tenant.logto.app", "app-id", "app-secret").unwrap();

        assert_eq!(config.credentials.resource, "https://tenant.logto.app/api");
        assert_eq!(config.scheme, "https");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.base_url(), "https://tenant.logto.app/");
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = LogtoConfig::new("tenant.logto.app/", "app-id", "app-secret").unwrap();
        assert_eq!(config.credentials.hostname, "tenant.logto.app");
    }

    #[test]
    fn test_missing_hostname_is_config_error() {
        let err = LogtoConfig::new("", "app-id", "app-secret").unwrap_err();
        assert_eq!(err, LogtoError::Config("missing Logto hostname".into()));
    }

    #[test]
    fn test_missing_secret_is_config_error() {
        let err = LogtoConfig::new("tenant.logto.app", "app-id", "").unwrap_err();
        assert!(matches!(err, LogtoError::Config(msg) if msg.contains("secret")));
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        let config = LogtoConfig::new("tenant.logto.app", "app-id", "app-secret")
            .unwrap()
            .with_scheme("ftp");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = LogtoConfig::new("tenant.logto.app", "app-id", "super-secret").unwrap();
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let settings: LogtoSettings =
            serde_json::from_str(r#"{ "hostname": "tenant.logto.app" }"#).unwrap();

        assert_eq!(settings.hostname.as_deref(), Some("tenant.logto.app"));
        assert!(settings.application_id.is_none());
        assert!(settings.timeout_secs.is_none());
    }
}

//! Configuration loader
//!
//! Resolves a [`LogtoConfig`] from explicit settings, environment variables
//! and config files.
//!
//! ## Resolution Order
//! For every field:
//! 1. The explicitly supplied value (caller or config file)
//! 2. The matching environment variable
//! 3. The built-in default, where one exists
//!
//! Empty strings count as absent. Hostname, application id and application
//! secret have no default; missing any of them fails resolution.
//!
//! ## Environment Variables
//! - `LOGTO_HOSTNAME`: Tenant hostname, e.g. `tenant.logto.app`
//! - `LOGTO_SCHEME`: `https` (default) or `http`
//! - `LOGTO_RESOURCE`: Token audience; defaults to `https://<hostname>/api`
//! - `LOGTO_APPLICATION_ID`: Machine-to-machine application id
//! - `LOGTO_APPLICATION_SECRET`: Machine-to-machine application secret
//! - `LOGTO_TIMEOUT_SECS`: Per-request timeout in seconds (default 60)

use std::path::Path;
use std::time::Duration;

use logto_domain::constants::{
    ENV_APPLICATION_ID, ENV_APPLICATION_SECRET, ENV_HOSTNAME, ENV_RESOURCE, ENV_SCHEME,
    ENV_TIMEOUT_SECS,
};
use logto_domain::{LogtoConfig, LogtoError, LogtoSettings, Result};

/// Load configuration from the process environment
///
/// A `.env` file in the working directory (or a parent) is read first when
/// present; variables already set in the environment win over it.
///
/// # Errors
/// Returns `LogtoError::Config` if the `.env` file is malformed or a
/// required variable is missing.
pub fn load() -> Result<LogtoConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => tracing::trace!("No .env file found"),
        Err(err) => {
            return Err(LogtoError::Config(format!("Failed to read .env file: {err}")));
        }
    }

    let config = resolve(LogtoSettings::default())?;
    tracing::info!(
        hostname = %config.credentials.hostname,
        "Configuration loaded from environment variables"
    );
    Ok(config)
}

/// Load settings from a `.toml` or `.json` file and fill gaps from the environment
///
/// # Errors
/// Returns `LogtoError::Config` if:
/// - The file does not exist or cannot be read
/// - The file format is invalid or unsupported
/// - A required value is missing from both the file and the environment
pub fn load_from_file(path: &Path) -> Result<LogtoConfig> {
    if !path.exists() {
        return Err(LogtoError::Config(format!("Config file not found: {}", path.display())));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| LogtoError::Config(format!("Failed to read config file: {e}")))?;

    resolve(parse_settings(&contents, path)?)
}

/// Parse settings from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `LogtoError::Config` if format is invalid or parsing fails.
pub fn parse_settings(contents: &str, path: &Path) -> Result<LogtoSettings> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LogtoError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LogtoError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(LogtoError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Resolve `settings` against the process environment
///
/// # Errors
/// See [`resolve_with`].
pub fn resolve(settings: LogtoSettings) -> Result<LogtoConfig> {
    resolve_with(settings, |key| std::env::var(key).ok())
}

/// Resolve `settings`, consulting `lookup` for anything not supplied
///
/// # Errors
/// Returns `LogtoError::Config` if a required value is missing, the timeout
/// is not a whole number of seconds, or the result fails validation.
pub fn resolve_with<F>(settings: LogtoSettings, lookup: F) -> Result<LogtoConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let pick = |explicit: Option<String>, key: &str| {
        explicit.filter(|v| !v.is_empty()).or_else(|| lookup(key).filter(|v| !v.is_empty()))
    };
    let required = |explicit: Option<String>, key: &str, what: &str| {
        pick(explicit, key)
            .ok_or_else(|| LogtoError::Config(format!("missing Logto {what} (set {key})")))
    };

    let hostname = required(settings.hostname, ENV_HOSTNAME, "hostname")?;
    let application_id = required(settings.application_id, ENV_APPLICATION_ID, "application id")?;
    let application_secret =
        required(settings.application_secret, ENV_APPLICATION_SECRET, "application secret")?;

    let mut config = LogtoConfig::new(hostname, application_id, application_secret)?;

    if let Some(resource) = pick(settings.resource, ENV_RESOURCE) {
        config = config.with_resource(resource);
    }
    if let Some(scheme) = pick(settings.scheme, ENV_SCHEME) {
        config = config.with_scheme(scheme);
    }

    let timeout_secs = match settings.timeout_secs {
        Some(secs) => Some(secs),
        None => pick(None, ENV_TIMEOUT_SECS)
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| {
                    LogtoError::Config(format!("Invalid {ENV_TIMEOUT_SECS} value {raw:?}: {e}"))
                })
            })
            .transpose()?,
    };
    if let Some(secs) = timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    config.validate()?;
    Ok(config)
}

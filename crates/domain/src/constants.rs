//! Protocol and configuration constants
//!
//! Centralized location for the names, paths and defaults shared by the
//! configuration layer and the HTTP client.

use std::time::Duration;

// Environment variables consulted when a setting is not supplied explicitly
pub const ENV_HOSTNAME: &str = "LOGTO_HOSTNAME";
pub const ENV_SCHEME: &str = "LOGTO_SCHEME";
pub const ENV_RESOURCE: &str = "LOGTO_RESOURCE";
pub const ENV_APPLICATION_ID: &str = "LOGTO_APPLICATION_ID";
pub const ENV_APPLICATION_SECRET: &str = "LOGTO_APPLICATION_SECRET";
pub const ENV_TIMEOUT_SECS: &str = "LOGTO_TIMEOUT_SECS";

// Connection defaults
pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

// Client-credentials exchange
pub const TOKEN_PATH: &str = "oidc/token";
pub const TOKEN_TYPE: &str = "Bearer";
pub const TOKEN_SCOPE: &str = "all";
pub const GRANT_TYPE: &str = "client_credentials";
/// Share of the advertised token lifetime during which a cached token is reused.
pub const TOKEN_LIFETIME_RATIO: f64 = 0.7;

// Collection paths, relative to the base URL
pub const APPLICATIONS_PATH: &str = "api/applications";
pub const USERS_PATH: &str = "api/users";
pub const ROLES_PATH: &str = "api/roles";
pub const RESOURCES_PATH: &str = "api/resources";
pub const SIGN_IN_EXPERIENCE_PATH: &str = "api/sign-in-exp";

// Sub-collection segments
pub const SECRETS_SEGMENT: &str = "secrets";
pub const ROLES_SEGMENT: &str = "roles";
pub const SCOPES_SEGMENT: &str = "scopes";

// Query parameters
pub const PARAM_PAGE: &str = "page";
pub const PARAM_PAGE_SIZE: &str = "page_size";
pub const PARAM_SEARCH: &str = "search";
pub const PARAM_INCLUDE_SCOPES: &str = "includeScopes";
/// Page size used when a scope is located by listing its parent resource.
pub const SCOPE_LOOKUP_PAGE_SIZE: u32 = 20;

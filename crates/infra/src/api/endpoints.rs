//! Accepted status codes per endpoint
//!
//! The management API is not uniform: creating an application or a role
//! answers 200 while creating an API resource or a scope answers 201, and
//! some reads treat 404 as "absent". Each operation names its own set here
//! instead of inferring one from the HTTP verb.

use reqwest::StatusCode;

const OK: StatusCode = StatusCode::OK;
const CREATED: StatusCode = StatusCode::CREATED;
const NO_CONTENT: StatusCode = StatusCode::NO_CONTENT;
const NOT_FOUND: StatusCode = StatusCode::NOT_FOUND;

pub const TOKEN: &[StatusCode] = &[OK];

pub const APPLICATION_GET: &[StatusCode] = &[OK, NOT_FOUND];
pub const APPLICATION_LIST: &[StatusCode] = &[OK];
pub const APPLICATION_CREATE: &[StatusCode] = &[OK];
pub const APPLICATION_UPDATE: &[StatusCode] = &[OK];
pub const APPLICATION_DELETE: &[StatusCode] = &[NO_CONTENT];
pub const APPLICATION_SECRETS: &[StatusCode] = &[OK];

pub const USER_GET: &[StatusCode] = &[OK, NOT_FOUND];
pub const USER_LIST: &[StatusCode] = &[OK];
pub const USER_CREATE: &[StatusCode] = &[OK];
pub const USER_UPDATE: &[StatusCode] = &[OK];
pub const USER_DELETE: &[StatusCode] = &[NO_CONTENT];

pub const USER_ROLES_LIST: &[StatusCode] = &[OK];
pub const USER_ROLES_ASSIGN: &[StatusCode] = &[CREATED];
pub const USER_ROLES_REPLACE: &[StatusCode] = &[OK];
pub const USER_ROLES_REMOVE: &[StatusCode] = &[NO_CONTENT];

pub const ROLE_GET: &[StatusCode] = &[OK, NOT_FOUND];
pub const ROLE_LIST: &[StatusCode] = &[OK];
pub const ROLE_CREATE: &[StatusCode] = &[OK];
pub const ROLE_UPDATE: &[StatusCode] = &[OK];
pub const ROLE_DELETE: &[StatusCode] = &[NO_CONTENT];
pub const ROLE_SCOPES_LIST: &[StatusCode] = &[OK, NOT_FOUND];
pub const ROLE_SCOPES_ASSIGN: &[StatusCode] = &[CREATED];
pub const ROLE_SCOPES_REMOVE: &[StatusCode] = &[NO_CONTENT];

pub const API_RESOURCE_GET: &[StatusCode] = &[OK, NOT_FOUND];
pub const API_RESOURCE_LIST: &[StatusCode] = &[OK];
pub const API_RESOURCE_CREATE: &[StatusCode] = &[CREATED];
pub const API_RESOURCE_UPDATE: &[StatusCode] = &[OK];
pub const API_RESOURCE_DELETE: &[StatusCode] = &[NO_CONTENT];

pub const SCOPE_LIST: &[StatusCode] = &[OK, NOT_FOUND];
pub const SCOPE_CREATE: &[StatusCode] = &[CREATED];
pub const SCOPE_UPDATE: &[StatusCode] = &[OK];
pub const SCOPE_DELETE: &[StatusCode] = &[NO_CONTENT];

pub const SIGN_IN_EXPERIENCE_GET: &[StatusCode] = &[OK, NOT_FOUND];
pub const SIGN_IN_EXPERIENCE_UPDATE: &[StatusCode] = &[OK];

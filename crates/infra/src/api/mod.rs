//! Management API client
//!
//! This module provides the authenticated REST client for the Logto
//! management API and typed operations for each resource kind.
//!
//! # Architecture
//!
//! - `auth`: client-credentials token exchange with an expiry-aware cache
//! - `request`: logical request model and URL/body construction
//! - `response`: status contract checks and JSON decoding
//! - `endpoints`: accepted status codes per operation
//! - `client`: authentication, dispatch and cancellation
//! - `resources`: per-resource CRUD handles
//!
//! Nothing here retries. Every failure is returned to the caller.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod errors;
pub mod request;
pub mod resources;
pub mod response;

pub use auth::{AccessTokenProvider, ClientCredentialsAuth};
pub use client::{LogtoClient, LogtoClientBuilder};
pub use errors::{ApiError, ApiErrorCategory};
pub use request::{ApiPath, ApiRequest, Query};
pub use resources::{
    ApiResources, Applications, Roles, Scopes, SignInExperiences, UserRoles, Users,
};
pub use response::{decode, expect};

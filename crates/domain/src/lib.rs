//! # Logto Domain
//!
//! Wire models and configuration types for the Logto management API.
//!
//! This crate contains:
//! - Resource models (applications, users, roles, API resources, scopes,
//!   sign-in experience)
//! - Client configuration structures
//! - The configuration error type and its Result alias
//! - Protocol constants
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O; everything that talks to the network lives in `logto-infra`

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

//! # Logto Infrastructure
//!
//! I/O side of the Logto management client.
//!
//! This crate contains:
//! - The HTTP transport
//! - Token acquisition and caching
//! - Request building and response contract checks
//! - Typed operations for every resource kind
//! - Configuration loading from the environment and files
//!
//! ## Architecture
//! - Wire models and configuration types come from `logto-domain`
//! - Contains all "impure" code (network, environment, filesystem)

pub mod api;
pub mod config;
pub mod http;
pub mod time;

// Re-export commonly used items
pub use api::{ApiError, ApiErrorCategory, LogtoClient};
pub use http::HttpClient;

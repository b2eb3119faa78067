//! Configuration loading and management
//!
//! This module resolves client configuration from explicit settings,
//! environment variables and config files.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_file, resolve, resolve_with};

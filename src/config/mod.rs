//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (API URL, timeouts, exit codes)
//! - CLI option types and parsing
//! - The YAML rewrite document loader

mod constants;
mod document;
mod types;

// Re-export all constants
pub use constants::*;
pub use document::RewriteConfig;
pub use types::{Config, FailOn, FailurePolicy, LogFormat, LogLevel, Opt};

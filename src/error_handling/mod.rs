//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions for configuration, API and sync failures
//! - Categorization of API errors into `ErrorType`
//! - Per-run failure counters

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_api_error, categorize_reqwest_error, categorize_status, update_error_stats,
};
pub use stats::FailureStats;
pub use types::{ApiError, ConfigError, ErrorType, InitializationError, SyncError};

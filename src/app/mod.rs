//! Main application modules.
//!
//! Statistics and summary printing used at the end of a sync run.

pub mod statistics;

// Re-export public API
pub use statistics::{print_failed_rewrites, print_failure_statistics, print_simple_summary};

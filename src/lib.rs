//! nextdns_rewrites library: reconcile NextDNS rewrites against a YAML file
//!
//! The NextDNS API can list, create and delete the rewrites of a profile, but
//! cannot update them. This library reads the desired rewrites from a
//! configuration document, resolves the target profile, and for every desired
//! rewrite either creates it or deletes the existing entry with that name and
//! creates it again. Remote rewrites not named in the document are left alone.
//!
//! # Example
//!
//! ```no_run
//! use nextdns_rewrites::{run_sync, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     config_path: std::path::PathBuf::from("rewrites.yaml"),
//!     api_key: Some("my-api-key".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_sync(config).await?;
//! println!("{} created, {} failed", report.created, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod api;
mod app;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod reconcile;
mod run;

// Re-export public API
pub use config::{Config, FailOn, FailurePolicy, LogFormat, LogLevel, Opt, RewriteConfig};
pub use error_handling::{ApiError, ConfigError, SyncError};
pub use models::{Profile, RemoteRewrite, RewriteSpec};
pub use run::{exit_code, run_sync, sync_profile, SyncReport};

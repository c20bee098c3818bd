//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    API_KEY_ENV_VAR, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What to do when a single rewrite cannot be created or deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Log the failure and move on to the next rewrite (default)
    Continue,
    /// Stop at the first failed rewrite
    Abort,
}

/// Exit code policy for runs with per-rewrite failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the run itself completed
    Never,
    /// Exit 2 if any rewrite failed (default)
    AnyFailure,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use nextdns_rewrites::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     config_path: PathBuf::from("rewrites.yaml"),
///     api_key: Some("secret".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// YAML document with `profile_name` and `rewrites`
    pub config_path: PathBuf,

    /// NextDNS API key
    pub api_key: Option<String>,

    /// Base URL of the API (overridable for testing)
    pub api_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Behavior on per-rewrite failures
    pub on_error: FailurePolicy,

    /// Exit code policy
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config.yaml"),
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            on_error: FailurePolicy::Continue,
            fail_on: FailOn::AnyFailure,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Basic usage (API key from the environment)
/// NEXTDNS_API_KEY=... nextdns_rewrites --config rewrites.yaml
///
/// # Stop at the first failing rewrite
/// nextdns_rewrites --config rewrites.yaml --on-error abort
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "nextdns_rewrites",
    version,
    about = "Manage NextDNS rewrites from a YAML configuration file."
)]
pub struct Opt {
    /// Path to YAML configuration file
    #[arg(long, value_parser)]
    pub config: PathBuf,

    /// NextDNS API key
    #[arg(long, env = API_KEY_ENV_VAR, hide_env_values = true)]
    pub api_key: Option<String>,

    /// NextDNS API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// What to do when a rewrite fails: continue|abort
    #[arg(long, value_enum, default_value_t = FailurePolicy::Continue)]
    pub on_error: FailurePolicy,

    /// Exit with code 2 when rewrites failed: never|any-failure
    #[arg(long, value_enum, default_value_t = FailOn::AnyFailure)]
    pub fail_on: FailOn,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            config_path: opt.config,
            api_key: opt.api_key,
            api_url: opt.api_url,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            log_level: opt.log_level,
            log_format: opt.log_format,
            on_error: opt.on_error,
            fail_on: opt.fail_on,
        }
    }
}

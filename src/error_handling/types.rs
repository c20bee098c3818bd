//! Error type definitions.
//!
//! This module defines the errors raised while loading configuration, talking to
//! the NextDNS API and running a sync, plus the categories used for failure statistics.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::run::SyncReport;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The API key cannot be sent as an HTTP header value.
    #[error("Invalid API key header value: {0}")]
    InvalidHeaderError(String),
}

/// Errors raised while loading the rewrite configuration document.
///
/// All of these are fatal and are raised before any remote call is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The configuration file exists but could not be read.
    #[error("Error loading configuration {}: {source}", .path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the expected shape.
    #[error("Error parsing YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A required top-level field is absent or blank.
    #[error("Missing required field `{0}` in configuration file")]
    MissingField(&'static str),

    /// A rewrite entry is present but unusable.
    #[error("Invalid rewrite at position {index}: {reason}")]
    InvalidRewrite {
        /// Zero-based position in the `rewrites` list
        index: usize,
        /// What is wrong with the entry
        reason: String,
    },
}

/// Errors reported by the NextDNS API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The API key was rejected (401/403).
    #[error("Authentication failed (HTTP {status}): {detail}")]
    Authentication {
        /// HTTP status code
        status: u16,
        /// Error detail from the response body
        detail: String,
    },

    /// The addressed profile or rewrite does not exist (404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API refused the request, e.g. a validation error on rewrite content.
    #[error("Request rejected (HTTP {status}): {detail}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Error detail from the response body
        detail: String,
    },

    /// Network, TLS or timeout failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Fatal errors for a sync run.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The configuration document could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// No API key was supplied via `--api-key` or `NEXTDNS_API_KEY`.
    #[error("NEXTDNS_API_KEY environment variable not set")]
    MissingApiKey,

    /// The configured profile name does not exist for this account.
    #[error("NextDNS profile name {0} not found in list of profiles")]
    ProfileNotFound(String),

    /// The profile listing call failed.
    #[error("Error getting NextDNS profiles: {0}")]
    ProfileLookup(#[source] ApiError),

    /// Listing the existing rewrites of the resolved profile failed.
    #[error("Error getting existing NextDNS rewrites: {0}")]
    ListRewrites(#[source] ApiError),

    /// A rewrite failed under the abort policy. The partial report is attached.
    #[error("Sync aborted after rewrite {name} failed: {detail}")]
    Aborted {
        /// Name of the rewrite that failed
        name: String,
        /// Failed stage and error
        detail: String,
        /// Work done before the failure
        report: Box<SyncReport>,
    },
}

/// Categories of per-rewrite failures, used for end-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// 401/403 from the API
    AuthenticationError,
    /// 404, e.g. deleting a rewrite that is already gone
    NotFoundError,
    /// 400/422, typically invalid rewrite content
    ValidationRejected,
    /// 429 Too Many Requests
    RateLimited,
    /// 5xx
    ServerError,
    /// Request exceeded the client timeout
    TimeoutError,
    /// Connection could not be established
    ConnectError,
    /// Body could not be read or decoded
    DecodeError,
    /// Other client errors and unexpected statuses
    OtherError,
}

impl ErrorType {
    /// Human-readable label used when printing statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::AuthenticationError => "Authentication error",
            ErrorType::NotFoundError => "Not found",
            ErrorType::ValidationRejected => "Rejected by API",
            ErrorType::RateLimited => "Rate limited",
            ErrorType::ServerError => "Server error",
            ErrorType::TimeoutError => "Timeout",
            ErrorType::ConnectError => "Connection error",
            ErrorType::DecodeError => "Decode error",
            ErrorType::OtherError => "Other error",
        }
    }
}

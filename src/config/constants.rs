//! Configuration constants.
//!
//! Defaults and fixed names used by the CLI, the API client and the logger.

/// Base URL of the NextDNS REST API.
pub const DEFAULT_API_URL: &str = "https://api.nextdns.io";

/// Environment variable holding the NextDNS API key.
pub const API_KEY_ENV_VAR: &str = "NEXTDNS_API_KEY";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for API requests.
pub const DEFAULT_USER_AGENT: &str = concat!("nextdns_rewrites/", env!("CARGO_PKG_VERSION"));

/// Name of the crate's log target, used for per-module log filtering.
pub const LOG_TARGET: &str = "nextdns_rewrites";

// Exit codes
/// Every desired rewrite converged.
pub const EXIT_SUCCESS: i32 = 0;
/// Fatal error before or during the run (configuration, authentication, profile lookup).
pub const EXIT_FATAL: i32 = 1;
/// The run completed but at least one rewrite failed.
pub const EXIT_PARTIAL_FAILURE: i32 = 2;

//! HTTP client initialization.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::ClientBuilder;

use crate::config::{Config, API_KEY_HEADER};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for all NextDNS API calls.
///
/// Creates a `reqwest::Client` configured with:
/// - Timeout and User-Agent from the configuration
/// - The API key as a default `X-Api-Key` header (marked sensitive so it is
///   never printed by `Debug` output)
///
/// # Errors
///
/// Returns `InitializationError::InvalidHeaderError` if the key contains
/// characters that are not valid in a header, or `HttpClientError` if the
/// client cannot be built.
pub fn init_client(config: &Config, api_key: &str) -> Result<reqwest::Client, InitializationError> {
    let mut key = HeaderValue::from_str(api_key)
        .map_err(|e| InitializationError::InvalidHeaderError(e.to_string()))?;
    key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

//! Error categorization.
//!
//! Maps API client errors onto `ErrorType` so failures can be counted per category.

use super::stats::FailureStats;
use super::types::{ApiError, ErrorType};

/// Categorizes an HTTP status code returned by the API.
pub fn categorize_status(status: u16) -> ErrorType {
    match status {
        401 | 403 => ErrorType::AuthenticationError,
        404 => ErrorType::NotFoundError,
        400 | 409 | 422 => ErrorType::ValidationRejected,
        429 => ErrorType::RateLimited,
        500..=599 => ErrorType::ServerError,
        _ => ErrorType::OtherError,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status codes take precedence over the transport-level error kind.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_timeout() {
        ErrorType::TimeoutError
    } else if error.is_connect() {
        ErrorType::ConnectError
    } else if error.is_body() || error.is_decode() {
        ErrorType::DecodeError
    } else {
        ErrorType::OtherError
    }
}

/// Categorizes an `ApiError` into an `ErrorType`.
pub fn categorize_api_error(error: &ApiError) -> ErrorType {
    match error {
        ApiError::Authentication { .. } => ErrorType::AuthenticationError,
        ApiError::NotFound(_) => ErrorType::NotFoundError,
        ApiError::Rejected { status, .. } => categorize_status(*status),
        ApiError::Transport(e) => categorize_reqwest_error(e),
        ApiError::MalformedResponse(_) => ErrorType::DecodeError,
    }
}

/// Records an `ApiError` in the failure statistics.
pub fn update_error_stats(stats: &FailureStats, error: &ApiError) {
    stats.increment(categorize_api_error(error));
}

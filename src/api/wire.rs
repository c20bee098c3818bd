//! NextDNS wire format.
//!
//! Every response is wrapped as `{"data": ...}` on success or
//! `{"errors": [{"code": ..., "detail": ..., "source": ...}]}` on failure.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error_handling::ApiError;

/// Longest raw body excerpt included in an error message.
const MAX_BODY_EXCERPT: usize = 200;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEntry {
    pub code: Option<String>,
    pub detail: Option<String>,
    pub source: Option<serde_json::Value>,
}

impl ErrorEntry {
    fn describe(&self) -> String {
        let mut out = self.code.clone().unwrap_or_else(|| "error".to_string());
        if let Some(detail) = &self.detail {
            out.push_str(": ");
            out.push_str(detail);
        }
        if let Some(source) = &self.source {
            out.push_str(&format!(" (source: {})", source));
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateRewriteBody<'a> {
    pub name: &'a str,
    pub content: &'a str,
}

/// Only the `errors` part of a body, for responses whose `data` is irrelevant.
#[derive(Debug, Deserialize)]
struct ErrorsOnly {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

/// Extracts a readable error description from a response body.
pub(crate) fn describe_error_body(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorsOnly>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed
            .errors
            .iter()
            .map(ErrorEntry::describe)
            .collect::<Vec<_>>()
            .join("; "),
        _ => {
            let text = String::from_utf8_lossy(body);
            let text = text.trim();
            if text.is_empty() {
                "empty response body".to_string()
            } else {
                text.chars().take(MAX_BODY_EXCERPT).collect()
            }
        }
    }
}

/// Maps a non-2xx status and its body to an `ApiError`.
pub(crate) fn error_from_status(status: u16, body: &[u8], resource: &str) -> ApiError {
    let detail = describe_error_body(body);
    match status {
        401 | 403 => ApiError::Authentication { status, detail },
        404 => ApiError::NotFound(format!("{} ({})", resource, detail)),
        _ => ApiError::Rejected { status, detail },
    }
}

/// Decodes the `data` member of a successful response.
///
/// A 2xx body that carries an `errors` array is still a rejection.
pub(crate) fn decode_data<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_slice(body)
        .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
    if !envelope.errors.is_empty() {
        return Err(ApiError::Rejected {
            status,
            detail: describe_error_body(body),
        });
    }
    envelope
        .data
        .ok_or_else(|| ApiError::MalformedResponse("response has no `data` member".to_string()))
}

/// Checks a 2xx response whose body is ignored (e.g. DELETE returning 204).
pub(crate) fn check_empty_success(status: u16, body: &[u8]) -> Result<(), ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }
    match serde_json::from_slice::<ErrorsOnly>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => Err(ApiError::Rejected {
            status,
            detail: describe_error_body(body),
        }),
        _ => Ok(()),
    }
}

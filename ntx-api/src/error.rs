//! Failures the API client can run into.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong with one API call.
///
/// `ApiClient` logs these and reports the call as unavailable; callers only
/// see `ApiError` when constructing a client from a bad base URL.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API url: {0}")]
    Url(#[from] url::ParseError),
    #[error("API url must be an http(s) base url, got {0:?}")]
    Scheme(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(StatusCode),
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

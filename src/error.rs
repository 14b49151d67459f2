// src/error.rs

use std::fmt;

/// Global client error enum.
/// Centralizes error handling and the mapping from HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    // Connection refused, DNS failure, timeout. The request never completed.
    Transport(String),

    // 404 Not Found (or a record the caller has no grading rights on)
    NotFound(String),

    // 400/422, or a DTO that failed client-side validation before sending
    Validation(String),

    // 401/403
    Auth(String),

    // Any other non-2xx status from the backend
    Server(String),

    // 2xx response whose body did not match the expected shape
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {}", msg),
            ApiError::NotFound(msg) => write!(f, "not found: {}", msg),
            ApiError::Validation(msg) => write!(f, "validation failed: {}", msg),
            ApiError::Auth(msg) => write!(f, "unauthorized: {}", msg),
            ApiError::Server(msg) => write!(f, "server error: {}", msg),
            ApiError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Converts `reqwest::Error` into `ApiError`.
/// Allows using the `?` operator on every request.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            ApiError::Transport(err.to_string())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Server(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Maps failed DTO validation so services can bail out before any
/// request is issued.
impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Validation(format!("invalid url: {}", err))
    }
}

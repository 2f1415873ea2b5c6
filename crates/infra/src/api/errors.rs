//! API-specific error types
//!
//! Classifies transport failures and non-success statuses. Requests are never
//! retried, so the category only drives logging and the domain mapping.

use std::time::Duration;

use prodboard_domain::ProdboardError;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401, 403
    Authentication,
    /// Other 4xx
    Client,
    /// 5xx
    Server,
    /// No response received
    Network,
    /// Client could not be built or the request is malformed
    Config,
}

impl ApiErrorCategory {
    /// Category of a non-success HTTP status, `None` for 1xx-3xx
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            401 | 403 => Some(Self::Authentication),
            400..=499 => Some(Self::Client),
            500..=599 => Some(Self::Server),
            _ => None,
        }
    }
}

/// Failures that left the caller without a response
///
/// Non-success statuses are not errors at this layer; they are handed back to
/// core together with the body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if err.is_connect() {
            return Self::Network(format!("HTTP connection failure: {err}"));
        }

        if err.is_builder() {
            return Self::Config(err.to_string());
        }

        Self::Network(err.to_string())
    }
}

impl From<ApiError> for ProdboardError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Config(msg) => Self::Config(msg),
            ApiError::Network(msg) => Self::Network(msg),
            timeout @ ApiError::Timeout(_) => Self::Network(timeout.to_string()),
        }
    }
}

//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Prodboard
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ProdboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProdboardError {
    /// The carried message without the category prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Config(message)
            | Self::Network(message)
            | Self::Auth(message)
            | Self::Storage(message)
            | Self::NotFound(message)
            | Self::InvalidInput(message)
            | Self::Internal(message) => message,
        }
    }
}

/// Result type alias for Prodboard operations
pub type Result<T> = std::result::Result<T, ProdboardError>;

//! Client configuration structures
//!
//! Every section carries defaults so a partial TOML/JSON file (or none at all)
//! still yields a usable configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::impl_identifier_conversions;

/// Root configuration for the dashboard client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub downloads: DownloadConfig,
    pub logging: LoggingConfig,
}

/// Backend server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server origin, without the `/api/v1` prefix (e.g. `http://localhost:8000`)
    pub base_url: String,
    /// Optional request timeout. `None` leaves the transport defaults in place.
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: None,
            user_agent: Some(concat!("prodboard/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

/// Where the bearer token is persisted between runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenBackend {
    #[default]
    File,
    Keychain,
    Memory,
}

impl_identifier_conversions!(TokenBackend {
    File => "file",
    Keychain => "keychain",
    Memory => "memory",
});

/// Token storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: TokenBackend,
    /// Session file used by the `file` backend
    pub token_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: TokenBackend::File, token_path: PathBuf::from(".prodboard/session.json") }
    }
}

/// Report download settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub directory: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self { directory: PathBuf::from("reports") }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: "warn,prodboard=info".to_string(), json: false }
    }
}

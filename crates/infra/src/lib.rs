//! # Prodboard Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest HTTP transport
//! - Token stores (session file, platform keychain, memory)
//! - The report download directory
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Implements traits defined in `prodboard-core`
//! - Contains all "impure" code (I/O, network, keychain)

pub mod api;
pub mod config;
pub mod downloads;
pub mod errors;
pub mod http;
pub mod observability;
pub mod storage;

use std::sync::Arc;

use prodboard_core::SessionClient;
use prodboard_domain::{Config, Result};

// Re-export commonly used items
pub use downloads::DownloadDirectory;
pub use errors::InfraError;
pub use http::{HttpTransport, HttpTransportBuilder};
pub use storage::{token_store_from_config, FileTokenStore, KeychainTokenStore, MemoryTokenStore};

/// Wire a [`SessionClient`] to the production adapters described by `config`
///
/// # Errors
/// Returns `ProdboardError::Config` for an unusable API URL and
/// `ProdboardError::Storage` when the token store cannot be opened.
pub fn session_client_from_config(config: &Config) -> Result<SessionClient> {
    SessionClient::builder()
        .transport(Arc::new(HttpTransport::from_config(&config.api)?))
        .token_store(token_store_from_config(&config.storage)?)
        .report_sink(Arc::new(DownloadDirectory::new(config.downloads.directory.clone())))
        .build()
}

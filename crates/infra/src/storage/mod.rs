//! Token store adapters
//!
//! Durable homes for the session's bearer token. The backend is picked from
//! `[storage]` in the configuration.

mod file;
mod keychain;

use std::sync::Arc;

use parking_lot::Mutex;
use prodboard_core::TokenStore;
use prodboard_domain::{Result, StorageConfig, TokenBackend};

pub use file::FileTokenStore;
pub use keychain::KeychainTokenStore;

/// Process-local store; the session ends with the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}

/// Build the configured token store
///
/// # Errors
/// Returns `ProdboardError::Storage` when the keychain cannot be opened.
pub fn token_store_from_config(config: &StorageConfig) -> Result<Arc<dyn TokenStore>> {
    Ok(match config.backend {
        TokenBackend::File => Arc::new(FileTokenStore::new(config.token_path.clone())),
        TokenBackend::Keychain => Arc::new(KeychainTokenStore::new()?),
        TokenBackend::Memory => Arc::new(MemoryTokenStore::new()),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::with_token("abc");
        assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_backend_uses_configured_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let config = StorageConfig { backend: TokenBackend::File, token_path: path.clone() };

        let store = token_store_from_config(&config).unwrap();
        store.save("abc").unwrap();
        assert!(path.exists());
    }
}

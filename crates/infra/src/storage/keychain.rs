//! Platform keychain token store

use keyring::Entry;
use prodboard_core::TokenStore;
use prodboard_domain::constants::{KEYCHAIN_SERVICE, TOKEN_STORAGE_KEY};
use prodboard_domain::Result;
use tracing::debug;

use crate::errors::to_domain;

/// Keeps the bearer token in the OS credential store
/// (service `prodboard`, account `auth_token`).
pub struct KeychainTokenStore {
    entry: Entry,
    service: String,
}

impl KeychainTokenStore {
    pub fn new() -> Result<Self> {
        Self::with_service(KEYCHAIN_SERVICE)
    }

    pub fn with_service(service: impl Into<String>) -> Result<Self> {
        let service = service.into();
        let entry = Entry::new(&service, TOKEN_STORAGE_KEY).map_err(to_domain)?;
        Ok(Self { entry, service })
    }
}

impl TokenStore for KeychainTokenStore {
    fn load(&self) -> Result<Option<String>> {
        debug!(service = %self.service, "reading token from keychain");
        match self.entry.get_password() {
            Ok(token) => Ok(Some(token).filter(|t| !t.is_empty())),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(to_domain(err)),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        self.entry.set_password(token).map_err(to_domain)?;
        debug!(service = %self.service, "token stored in keychain");
        Ok(())
    }

    /// Idempotent
    fn clear(&self) -> Result<()> {
        match self.entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(to_domain(err)),
        }
    }
}

impl std::fmt::Debug for KeychainTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeychainTokenStore").field("service", &self.service).finish()
    }
}

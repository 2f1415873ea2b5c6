//! Bearer-token session
//!
//! The session is the only piece of client state that outlives a run. It is
//! owned by [`SessionClient`](crate::SessionClient) and mirrors its token into
//! a [`TokenStore`].

pub mod ports;

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

pub use ports::TokenStore;

/// In-memory token plus its durable mirror
pub struct Session {
    token: RwLock<Option<String>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    /// Restore the session from durable storage.
    ///
    /// A store that cannot be read starts the session logged out.
    pub fn restore(store: Arc<dyn TokenStore>) -> Self {
        let token = match store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                warn!(error = %err, "failed to read persisted token; starting logged out");
                None
            }
        };
        debug!(authenticated = token.is_some(), "session restored");
        Self { token: RwLock::new(token), store }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Adopt a freshly issued token (memory + durable store)
    pub fn establish(&self, token: String) {
        if let Err(err) = self.store.save(&token) {
            warn!(error = %err, "failed to persist token; session will not survive restart");
        }
        *self.token.write() = Some(token);
    }

    /// Drop the token from memory and durable storage. Idempotent.
    pub fn clear(&self) {
        *self.token.write() = None;
        self.forget_persisted();
    }

    /// Clear the session only if it still holds `used`.
    ///
    /// Returns `true` when this call ended the session. Several requests sent
    /// with the same token may all come back 401; only the first one expires
    /// it, and a token issued by a later login is left alone.
    pub fn expire_if_current(&self, used: &str) -> bool {
        let mut token = self.token.write();
        if token.as_deref() != Some(used) {
            return false;
        }
        *token = None;
        drop(token);
        self.forget_persisted();
        true
    }

    fn forget_persisted(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to remove persisted token");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("authenticated", &self.is_authenticated()).finish()
    }
}

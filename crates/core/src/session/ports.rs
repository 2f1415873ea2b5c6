//! Port interface for durable token persistence

use prodboard_domain::Result;

/// Persists the bearer token between runs
///
/// An absent token means "logged out". Implementations store a single value.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any
    fn load(&self) -> Result<Option<String>>;

    /// Persist the token, replacing any previous value
    fn save(&self, token: &str) -> Result<()>;

    /// Remove the persisted token. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;
}

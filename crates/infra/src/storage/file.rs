//! Session file token store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use prodboard_core::TokenStore;
use prodboard_domain::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::to_domain;

/// On-disk layout: `{ "auth_token": "..." }`
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    auth_token: Option<String>,
}

/// Persists the bearer token in a small JSON file.
///
/// A missing file means logged out.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(to_domain(err)),
        };
        let file: SessionFile = serde_json::from_slice(&contents).map_err(to_domain)?;
        Ok(file.auth_token.filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_domain)?;
        }
        let contents = serde_json::to_vec(&SessionFile { auth_token: Some(token.to_string()) })
            .map_err(to_domain)?;
        fs::write(&self.path, contents).map_err(to_domain)?;
        restrict_permissions(&self.path)?;
        debug!(path = %self.path.display(), "session token saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "session token removed");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(to_domain(err)),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(to_domain)
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

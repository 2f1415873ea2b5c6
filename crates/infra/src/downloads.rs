//! Report files written to a local directory

use std::fs;
use std::path::{Path, PathBuf};

use prodboard_core::ReportSink;
use prodboard_domain::{ProdboardError, Result};
use tracing::debug;

use crate::errors::to_domain;

/// Saves downloaded reports under a fixed directory, creating it on demand
#[derive(Debug, Clone)]
pub struct DownloadDirectory {
    root: PathBuf,
}

impl DownloadDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ReportSink for DownloadDirectory {
    fn save(&self, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        let name = Path::new(file_name);
        if file_name.is_empty() || name.file_name() != Some(name.as_os_str()) {
            return Err(ProdboardError::InvalidInput(format!(
                "report file name must be a bare name: {file_name}"
            )));
        }

        fs::create_dir_all(&self.root).map_err(to_domain)?;
        let path = self.root.join(name);
        fs::write(&path, content).map_err(to_domain)?;
        debug!(path = %path.display(), bytes = content.len(), "report written");
        Ok(path)
    }
}

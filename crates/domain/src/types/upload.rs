//! File import types

use serde::{Deserialize, Serialize};

use super::{de_count, de_identifier};

/// A file picked for upload, already read into memory
#[derive(Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl FileSelection {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), content }
    }
}

impl std::fmt::Debug for FileSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSelection")
            .field("file_name", &self.file_name)
            .field("bytes", &self.content.len())
            .finish()
    }
}

/// Successful response of `POST /files/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default, deserialize_with = "de_count")]
    pub records_imported: u64,
    #[serde(deserialize_with = "de_identifier")]
    pub batch_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// One entry of `GET /files/batches`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportBatch {
    #[serde(deserialize_with = "de_identifier")]
    pub id: String,
    pub filename: String,
    #[serde(default, deserialize_with = "de_count")]
    pub records_imported: u64,
    pub import_date: String,
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

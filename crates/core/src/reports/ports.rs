//! Port interfaces for saving downloaded reports

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use prodboard_domain::Result;

/// Destination for downloaded report files
pub trait ReportSink: Send + Sync {
    /// Save `content` under `file_name`, returning where it was written
    fn save(&self, file_name: &str, content: &[u8]) -> Result<PathBuf>;
}

/// Source of the current date for generated filenames
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, UTC calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

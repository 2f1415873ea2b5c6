//! Domain types and models

pub mod analytics;
pub mod auth;
pub mod report;
pub mod ui;
pub mod upload;

pub use analytics::{
    CategorySummary, PerformanceRow, RevenueTrends, SummaryEnvelope, SummaryMetrics,
    SummaryPayload, TopProduct, TrendPeriod, TrendPoint,
};
pub use auth::{Credentials, ErrorDetail, Registration, TokenResponse, UserProfile};
pub use report::{report_file_name, ReportFormat, ReportKind};
pub use ui::{Severity, View};
pub use upload::{FileSelection, ImportBatch, UploadResult};

use serde::{Deserialize, Deserializer};

/// Deserialize a JSON count that may arrive as an integer, a float or `null`.
///
/// Negative, non-finite and absent values become zero.
pub(crate) fn de_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(count_from(value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn count_from(value: Option<f64>) -> u64 {
    value.filter(|n| n.is_finite() && *n > 0.0).map_or(0, |n| n.round() as u64)
}

/// Deserialize an identifier the server may send as a number or a string.
pub(crate) fn de_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Identifier {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Identifier::deserialize(deserializer)? {
        Identifier::Text(text) => text,
        Identifier::Number(number) => number.to_string(),
    })
}

//! Analytics payloads: dashboard summary, per-product performance and
//! revenue trends

use serde::{Deserialize, Serialize};

use super::{count_from, de_count};
use crate::impl_identifier_conversions;

/// Aggregate dashboard metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_produced: u64,
    pub total_sold: u64,
    pub total_revenue: f64,
    pub active_products: u64,
}

/// Body of `GET /analytics/summary`
///
/// The breakdowns are optional; an older backend that only sends `summary`
/// still yields the cards.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryEnvelope {
    pub summary: SummaryPayload,
    #[serde(default)]
    pub categories: Vec<CategorySummary>,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
}

/// Totals for one product category within the summary window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "de_count")]
    pub product_count: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "de_count")]
    pub total_production: u64,
}

/// One of the best-selling products by revenue (the backend sends five)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    #[serde(default)]
    pub revenue: f64,
}

/// Raw summary object. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummaryPayload {
    pub total_produced: Option<f64>,
    pub total_sold: Option<f64>,
    pub total_revenue: Option<f64>,
    pub active_products: Option<f64>,
}

impl From<SummaryPayload> for SummaryMetrics {
    fn from(payload: SummaryPayload) -> Self {
        Self {
            total_produced: count_from(payload.total_produced),
            total_sold: count_from(payload.total_sold),
            total_revenue: payload.total_revenue.filter(|v| v.is_finite()).unwrap_or(0.0),
            active_products: count_from(payload.active_products),
        }
    }
}

impl From<SummaryEnvelope> for SummaryMetrics {
    fn from(envelope: SummaryEnvelope) -> Self {
        envelope.summary.into()
    }
}

/// Bucket size for `GET /analytics/trends/revenue?period=`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl_identifier_conversions!(TrendPeriod {
    Daily => "daily",
    Weekly => "weekly",
    Monthly => "monthly",
});

/// Revenue for one bucket; `date` is the bucket start as ISO text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    #[serde(default)]
    pub value: f64,
}

/// Body of `GET /analytics/trends/revenue`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevenueTrends {
    #[serde(default)]
    pub trends: Vec<TrendPoint>,
}

/// One ranked product in `GET /analytics/performance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRow {
    pub product_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "de_count")]
    pub total_produced: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub total_sold: u64,
    pub total_revenue: f64,
    /// Percentage of produced units that were sold
    #[serde(rename = "sell_through_rate")]
    pub sell_through_rate_percent: f64,
}

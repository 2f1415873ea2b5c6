//! Pure render functions: domain data in, display strings out
//!
//! Nothing here touches the session or the network, so the formatting rules
//! (two-decimal currency, one-decimal rates, placeholders) are tested in
//! isolation and shared by every rendering target.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use prodboard_domain::constants::{
    CATEGORY_COLUMNS, IMPORT_HISTORY_COLUMNS, NO_DATA_MESSAGE, NO_IMPORTS_MESSAGE,
    PERFORMANCE_COLUMNS, TOP_PRODUCT_COLUMNS, TREND_COLUMNS, UNCATEGORIZED_LABEL,
};
use prodboard_domain::{
    CategorySummary, ImportBatch, PerformanceRow, SummaryMetrics, TopProduct, TrendPoint,
};
use serde::Serialize;

const PERFORMANCE_HEADERS: [&str; PERFORMANCE_COLUMNS] =
    ["Producto", "Categoría", "Producido", "Vendido", "Ingresos", "Tasa de Venta"];

const IMPORT_HISTORY_HEADERS: [&str; IMPORT_HISTORY_COLUMNS] =
    ["ID", "Archivo", "Registros", "Fecha", "Estado", "Error"];

const CATEGORY_HEADERS: [&str; CATEGORY_COLUMNS] =
    ["Categoría", "Productos", "Ingresos", "Producción"];

const TOP_PRODUCT_HEADERS: [&str; TOP_PRODUCT_COLUMNS] = ["Producto", "Ingresos"];

const TREND_HEADERS: [&str; TREND_COLUMNS] = ["Fecha", "Ingresos"];

/// Summary cards as displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub total_produced: String,
    pub total_sold: String,
    pub total_revenue: String,
    pub active_products: String,
}

impl Default for SummaryView {
    fn default() -> Self {
        render_summary(&SummaryMetrics::default())
    }
}

/// One table body row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableRow {
    /// A single message cell spanning the whole table
    Placeholder { message: String, colspan: usize },
    Cells { cells: Vec<String> },
}

/// Header plus rows, ready for any rendering target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

impl Table {
    fn new(headers: &[&'static str]) -> Self {
        Self { headers: headers.to_vec(), rows: Vec::new() }
    }

    /// Table with headers and no body, as shown before the first load
    pub fn performance() -> Self {
        Self::new(&PERFORMANCE_HEADERS)
    }

    pub fn import_history() -> Self {
        Self::new(&IMPORT_HISTORY_HEADERS)
    }

    pub fn categories() -> Self {
        Self::new(&CATEGORY_HEADERS)
    }

    pub fn top_products() -> Self {
        Self::new(&TOP_PRODUCT_HEADERS)
    }

    pub fn revenue_trends() -> Self {
        Self::new(&TREND_HEADERS)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.rows.as_slice(), [TableRow::Placeholder { .. }])
    }
}

pub fn render_summary(metrics: &SummaryMetrics) -> SummaryView {
    SummaryView {
        total_produced: metrics.total_produced.to_string(),
        total_sold: metrics.total_sold.to_string(),
        total_revenue: format_currency(metrics.total_revenue),
        active_products: metrics.active_products.to_string(),
    }
}

pub fn render_performance(rows: &[PerformanceRow]) -> Table {
    let mut table = Table::performance();
    if rows.is_empty() {
        table.rows.push(placeholder(NO_DATA_MESSAGE, PERFORMANCE_COLUMNS));
        return table;
    }

    table.rows = rows
        .iter()
        .map(|row| TableRow::Cells {
            cells: vec![
                row.product_name.clone(),
                category_label(row.category_name.as_deref()),
                row.total_produced.to_string(),
                row.total_sold.to_string(),
                format_currency(row.total_revenue),
                format_rate(row.sell_through_rate_percent),
            ],
        })
        .collect();
    table
}

pub fn render_import_history(batches: &[ImportBatch]) -> Table {
    let mut table = Table::import_history();
    if batches.is_empty() {
        table.rows.push(placeholder(NO_IMPORTS_MESSAGE, IMPORT_HISTORY_COLUMNS));
        return table;
    }

    table.rows = batches
        .iter()
        .map(|batch| TableRow::Cells {
            cells: vec![
                batch.id.clone(),
                batch.filename.clone(),
                batch.records_imported.to_string(),
                format_date(&batch.import_date),
                batch.status.clone(),
                batch.error_message.clone().unwrap_or_default(),
            ],
        })
        .collect();
    table
}

pub fn render_category_breakdown(categories: &[CategorySummary]) -> Table {
    let mut table = Table::categories();
    if categories.is_empty() {
        table.rows.push(placeholder(NO_DATA_MESSAGE, CATEGORY_COLUMNS));
        return table;
    }

    table.rows = categories
        .iter()
        .map(|category| TableRow::Cells {
            cells: vec![
                category_label(category.category_name.as_deref()),
                category.product_count.to_string(),
                format_currency(category.total_revenue),
                category.total_production.to_string(),
            ],
        })
        .collect();
    table
}

/// Ranked as received; the backend orders by revenue
pub fn render_top_products(products: &[TopProduct]) -> Table {
    let mut table = Table::top_products();
    if products.is_empty() {
        table.rows.push(placeholder(NO_DATA_MESSAGE, TOP_PRODUCT_COLUMNS));
        return table;
    }

    table.rows = products
        .iter()
        .map(|product| TableRow::Cells {
            cells: vec![product.name.clone(), format_currency(product.revenue)],
        })
        .collect();
    table
}

pub fn render_revenue_trends(points: &[TrendPoint]) -> Table {
    let mut table = Table::revenue_trends();
    if points.is_empty() {
        table.rows.push(placeholder(NO_DATA_MESSAGE, TREND_COLUMNS));
        return table;
    }

    table.rows = points
        .iter()
        .map(|point| TableRow::Cells {
            cells: vec![format_date(&point.date), format_currency(point.value)],
        })
        .collect();
    table
}

/// `$` followed by the amount with two decimals
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Percentage with one decimal and a `%` suffix
pub fn format_rate(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Day/month/year for ISO dates and datetimes; unparseable input is shown as-is
pub fn format_date(value: &str) -> String {
    let date = DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| value.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))
        .or_else(|| value.parse::<NaiveDate>().ok());

    date.map_or_else(|| value.to_string(), |d| d.format("%-d/%-m/%Y").to_string())
}

fn category_label(name: Option<&str>) -> String {
    name.filter(|c| !c.is_empty()).unwrap_or(UNCATEGORIZED_LABEL).to_string()
}

fn placeholder(message: &str, colspan: usize) -> TableRow {
    TableRow::Placeholder { message: message.to_string(), colspan }
}

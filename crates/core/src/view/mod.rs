//! View model: state, alerts and render functions

pub mod alerts;
pub mod render;
pub mod state;

pub use alerts::AlertCenter;
pub use render::{
    format_currency, format_date, format_rate, render_category_breakdown, render_import_history,
    render_performance, render_revenue_trends, render_summary, render_top_products, SummaryView,
    Table, TableRow,
};
pub use state::{Alert, NavButtons, UploadPanel, ViewState};

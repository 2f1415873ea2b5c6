//! Report download identifiers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::REPORT_FILE_PREFIX;
use crate::impl_identifier_conversions;

/// Closed set of downloadable reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Performance,
    Trends,
    Categories,
    Complete,
}

impl_identifier_conversions!(ReportKind {
    Performance => "performance",
    Trends => "trends",
    Categories => "categories",
    Complete => "complete",
});

impl ReportKind {
    pub const ALL: [Self; 4] = [Self::Performance, Self::Trends, Self::Categories, Self::Complete];

    /// Backend path below the API base
    pub fn endpoint(self) -> String {
        format!("/reports/{}", self.as_str())
    }

    /// The complete workbook is only produced as a spreadsheet.
    pub const fn supports(self, format: ReportFormat) -> bool {
        !matches!((self, format), (Self::Complete, ReportFormat::Csv))
    }
}

/// Export format requested through `?format=`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Excel,
    Csv,
}

impl_identifier_conversions!(ReportFormat {
    Excel => "excel",
    Csv => "csv",
});

impl ReportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Excel => "xlsx",
            Self::Csv => "csv",
        }
    }
}

/// Saved filename: `reporte_{kind}_{YYYY-MM-DD}.{ext}`
pub fn report_file_name(kind: ReportKind, format: ReportFormat, date: NaiveDate) -> String {
    format!("{REPORT_FILE_PREFIX}_{kind}_{}.{}", date.format("%Y-%m-%d"), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_kind_identifier() {
        assert_eq!(ReportKind::Performance.endpoint(), "/reports/performance");
        assert_eq!(ReportKind::Categories.endpoint(), "/reports/categories");
    }

    #[test]
    fn unknown_kind_fails_fast() {
        assert!("inventory".parse::<ReportKind>().is_err());
        assert_eq!("Trends".parse::<ReportKind>().unwrap(), ReportKind::Trends);
    }

    #[test]
    fn file_name_embeds_kind_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            report_file_name(ReportKind::Performance, ReportFormat::Excel, date),
            "reporte_performance_2024-03-07.xlsx"
        );
        assert_eq!(
            report_file_name(ReportKind::Trends, ReportFormat::Csv, date),
            "reporte_trends_2024-03-07.csv"
        );
    }

    #[test]
    fn complete_report_is_excel_only() {
        assert!(ReportKind::Complete.supports(ReportFormat::Excel));
        assert!(!ReportKind::Complete.supports(ReportFormat::Csv));
        assert!(ReportKind::Trends.supports(ReportFormat::Csv));
    }
}

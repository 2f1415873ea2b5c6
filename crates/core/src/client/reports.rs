//! Report downloads

use std::path::PathBuf;

use prodboard_domain::constants::{CONNECTION_ERROR_PREFIX, DOWNLOAD_ERROR};
use prodboard_domain::{report_file_name, ReportFormat, ReportKind, Severity};
use tracing::{info, instrument, warn};

use super::SessionClient;
use crate::transport_ports::ApiRequest;

impl SessionClient {
    /// Download `kind` as a spreadsheet
    pub async fn download_report(&self, kind: ReportKind) -> Option<PathBuf> {
        self.download_report_as(kind, ReportFormat::Excel).await
    }

    /// Download a report and hand it to the report sink.
    ///
    /// Returns where the file was saved. The request goes out with the bearer
    /// token but outside the JSON wrapper since the body is binary.
    #[instrument(skip(self), fields(kind = %kind, format = %format))]
    pub async fn download_report_as(&self, kind: ReportKind, format: ReportFormat) -> Option<PathBuf> {
        if !kind.supports(format) {
            self.alerts.show(
                format!("El reporte {kind} no está disponible en formato {format}"),
                Severity::Warning,
            );
            return None;
        }

        let request =
            self.bearer_request(ApiRequest::get(kind.endpoint()).with_query("format", format));
        let reply = match self.transport.send(request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "report request failed");
                self.alerts.show(format!("{CONNECTION_ERROR_PREFIX}{}", err.message()), Severity::Danger);
                return None;
            }
        };

        if !reply.is_success() {
            warn!(status = reply.status, "report download rejected");
            self.alerts.show(DOWNLOAD_ERROR, Severity::Danger);
            return None;
        }

        let file_name = report_file_name(kind, format, self.clock.today());
        match self.reports.save(&file_name, &reply.body) {
            Ok(path) => {
                info!(path = %path.display(), bytes = reply.body.len(), "report saved");
                self.alerts.show(format!("Reporte de {kind} descargado exitosamente"), Severity::Success);
                Some(path)
            }
            Err(err) => {
                warn!(error = %err, file = %file_name, "could not save report");
                self.alerts.show(DOWNLOAD_ERROR, Severity::Danger);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{harness, harness_with_sink, MemorySink};
    use super::*;
    use crate::transport_ports::{Method, AUTHORIZATION};

    #[tokio::test]
    async fn performance_report_uses_excel_and_dated_name() {
        let h = harness(Some("tok"));
        h.transport.respond("/reports/performance", 200, b"xlsx-bytes".to_vec());

        let path = h.client.download_report(ReportKind::Performance).await;

        assert_eq!(path, Some(PathBuf::from("reports/reporte_performance_2024-03-07.xlsx")));
        let sent = &h.transport.requests()[0];
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.query, vec![("format".to_string(), "excel".to_string())]);
        assert_eq!(sent.header(AUTHORIZATION), Some("Bearer tok"));
        assert_eq!(
            h.sink.files(),
            vec![("reporte_performance_2024-03-07.xlsx".to_string(), b"xlsx-bytes".to_vec())]
        );
        assert_eq!(h.client.snapshot().alert_severity(), Some(Severity::Success));
    }

    #[tokio::test]
    async fn csv_report_gets_csv_extension() {
        let h = harness(Some("tok"));
        h.transport.respond("/reports/trends", 200, "a,b\n1,2\n");

        h.client.download_report_as(ReportKind::Trends, ReportFormat::Csv).await;

        assert_eq!(h.sink.files()[0].0, "reporte_trends_2024-03-07.csv");
        assert_eq!(h.transport.requests()[0].query[0].1, "csv");
    }

    #[tokio::test]
    async fn complete_report_has_no_csv() {
        let h = harness(Some("tok"));

        let path = h.client.download_report_as(ReportKind::Complete, ReportFormat::Csv).await;

        assert!(path.is_none());
        assert!(h.transport.requests().is_empty());
        assert_eq!(h.client.snapshot().alert_severity(), Some(Severity::Warning));
    }

    #[tokio::test]
    async fn failed_download_shows_error_and_saves_nothing() {
        let h = harness(Some("tok"));
        h.transport.respond("/reports/categories", 500, "");

        assert!(h.client.download_report(ReportKind::Categories).await.is_none());

        assert!(h.sink.files().is_empty());
        let alert = h.client.snapshot().alert.unwrap();
        assert_eq!(alert.message, DOWNLOAD_ERROR);
        assert_eq!(alert.severity, Severity::Danger);
    }

    #[tokio::test]
    async fn sink_failure_is_a_download_error() {
        let h = harness_with_sink(Some("tok"), MemorySink::failing());
        h.transport.respond("/reports/complete", 200, "bytes");

        assert!(h.client.download_report(ReportKind::Complete).await.is_none());
        assert_eq!(h.client.snapshot().alert.unwrap().message, DOWNLOAD_ERROR);
    }
}

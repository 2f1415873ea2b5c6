//! File import workflow

use prodboard_domain::constants::{
    CONNECTION_ERROR_PREFIX, MISSING_FILE, UPLOAD_ERROR_PREFIX, UPLOAD_FALLBACK, UPLOAD_FIELD_NAME,
    UPLOAD_PATH,
};
use prodboard_domain::{ErrorDetail, FileSelection, Severity, UploadResult};
use tracing::{info, instrument, warn};

use super::SessionClient;
use crate::transport_ports::ApiRequest;
use crate::view::UploadPanel;

impl SessionClient {
    /// Put a file into the upload form
    pub fn select_file(&self, file: FileSelection) {
        self.state.lock().selected_file = Some(file);
    }

    pub fn clear_file(&self) {
        self.state.lock().selected_file = None;
    }

    /// Upload the selected file, then refresh the dashboard.
    ///
    /// The request carries the bearer token but skips the JSON wrapper, so a
    /// 401 here is reported in the upload panel like any other failure.
    #[instrument(skip(self))]
    pub async fn upload_file(&self) -> bool {
        let selected = self.state.lock().selected_file.clone();
        let Some(file) = selected else {
            self.alerts.show(MISSING_FILE, Severity::Warning);
            return false;
        };

        info!(file = %file.file_name, bytes = file.content.len(), "uploading file");
        self.state.lock().upload = UploadPanel::Busy;

        let request =
            self.bearer_request(ApiRequest::post(UPLOAD_PATH).multipart(UPLOAD_FIELD_NAME, file));
        let reply = match self.transport.send(request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "upload request failed");
                self.state.lock().upload =
                    UploadPanel::Failed { message: format!("{CONNECTION_ERROR_PREFIX}{}", err.message()) };
                return false;
            }
        };

        let result = if reply.is_success() {
            reply.json::<UploadResult>().map_err(|err| {
                warn!(error = %err, "upload succeeded with an unexpected body");
                UPLOAD_FALLBACK.to_string()
            })
        } else {
            warn!(status = reply.status, "upload rejected");
            Err(ErrorDetail::from_body(&reply.body).unwrap_or_else(|| UPLOAD_FALLBACK.to_string()))
        };

        match result {
            Ok(result) => {
                info!(records = result.records_imported, batch_id = %result.batch_id, "file imported");
                self.state.lock().upload = UploadPanel::Imported { result };
                self.refresh_dashboard().await;
                self.clear_file();
                true
            }
            Err(detail) => {
                self.state.lock().upload =
                    UploadPanel::Failed { message: format!("{UPLOAD_ERROR_PREFIX}{detail}") };
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use prodboard_domain::constants::{PERFORMANCE_PATH, SUMMARY_PATH};

    use super::super::testing::harness;
    use super::*;
    use crate::transport_ports::{RequestBody, AUTHORIZATION, CONTENT_TYPE};

    fn sample() -> FileSelection {
        FileSelection::new("ventas.xlsx", b"PK\x03\x04".to_vec())
    }

    #[tokio::test]
    async fn no_selection_warns_without_network() {
        let h = harness(Some("tok"));

        assert!(!h.client.upload_file().await);

        assert!(h.transport.requests().is_empty());
        let state = h.client.snapshot();
        assert_eq!(state.alert.unwrap().message, MISSING_FILE);
        assert_eq!(state.upload, UploadPanel::Idle);
    }

    #[tokio::test]
    async fn successful_upload_refreshes_and_clears_selection() {
        let h = harness(Some("tok"));
        h.transport.respond(UPLOAD_PATH, 200, r#"{"records_imported":42,"batch_id":17}"#);
        h.transport.respond(SUMMARY_PATH, 200, r#"{"summary":{"total_sold":42}}"#);
        h.transport.respond(PERFORMANCE_PATH, 200, "[]");
        h.client.select_file(sample());

        assert!(h.client.upload_file().await);

        let state = h.client.snapshot();
        let UploadPanel::Imported { result } = &state.upload else { panic!("expected import") };
        assert_eq!(result.records_imported, 42);
        assert_eq!(result.batch_id, "17");
        assert!(state.selected_file.is_none());
        assert_eq!(state.summary.total_sold, "42");

        let sent = h.transport.requests();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].header(AUTHORIZATION), Some("Bearer tok"));
        assert_eq!(sent[0].header(CONTENT_TYPE), None);
        assert!(matches!(&sent[0].body, RequestBody::Multipart { field, .. } if field == "file"));
    }

    #[tokio::test]
    async fn panel_is_busy_while_request_is_in_flight() {
        let h = harness(Some("tok"));
        h.transport.respond(UPLOAD_PATH, 400, r#"{"detail":"x"}"#);
        h.client.select_file(sample());

        // The fake transport yields before replying, so the second branch
        // runs while the upload is still waiting on the network.
        let (ok, in_flight) =
            tokio::join!(h.client.upload_file(), async { h.client.snapshot().upload });

        assert!(!ok);
        assert_eq!(in_flight, UploadPanel::Busy);
        assert!(matches!(h.client.snapshot().upload, UploadPanel::Failed { .. }));
    }

    #[tokio::test]
    async fn rejected_upload_shows_inline_error() {
        let h = harness(Some("tok"));
        h.transport.respond(UPLOAD_PATH, 400, r#"{"detail":"Formato no soportado"}"#);
        h.client.select_file(sample());

        assert!(!h.client.upload_file().await);

        let state = h.client.snapshot();
        assert_eq!(state.upload, UploadPanel::Failed { message: "Error: Formato no soportado".into() });
        assert!(state.selected_file.is_some());
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn unauthorized_upload_does_not_log_out() {
        let h = harness(Some("tok"));
        h.transport.respond(UPLOAD_PATH, 401, "");
        h.client.select_file(sample());

        h.client.upload_file().await;

        assert!(h.client.is_authenticated());
        assert_eq!(
            h.client.snapshot().upload,
            UploadPanel::Failed { message: format!("{UPLOAD_ERROR_PREFIX}{UPLOAD_FALLBACK}") }
        );
    }

    #[tokio::test]
    async fn network_failure_is_reported_in_panel() {
        let h = harness(Some("tok"));
        h.client.select_file(sample());

        h.client.upload_file().await;

        let UploadPanel::Failed { message } = h.client.snapshot().upload else {
            panic!("expected failure")
        };
        assert!(message.starts_with(CONNECTION_ERROR_PREFIX));
    }
}

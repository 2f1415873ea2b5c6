//! In-memory fakes for driving `SessionClient` in unit tests

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use prodboard_domain::{ProdboardError, Result};

use super::SessionClient;
use crate::reports::{Clock, ReportSink};
use crate::session::TokenStore;
use crate::transport_ports::{ApiReply, ApiRequest, Transport};

/// Answers by request path and records everything it was sent.
///
/// Each send yields once before answering so that concurrent callers
/// interleave the way real network calls do.
#[derive(Default)]
pub(crate) struct FakeTransport {
    routes: Mutex<HashMap<String, ApiReply>>,
    sent: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn respond(&self, path: &str, status: u16, body: impl Into<Vec<u8>>) {
        self.routes.lock().insert(path.to_string(), ApiReply::new(status, body));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply> {
        let path = request.path.clone();
        self.sent.lock().push(request);
        tokio::task::yield_now().await;
        self.routes
            .lock()
            .get(&path)
            .cloned()
            .ok_or_else(|| ProdboardError::Network(format!("connection refused: {path}")))
    }
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl MemoryStore {
    pub(crate) fn value(&self) -> Option<String> {
        self.value.lock().clone()
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.value.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.value.lock() = None;
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MemorySink {
    files: Mutex<Vec<(String, Vec<u8>)>>,
    fail: bool,
}

impl MemorySink {
    pub(crate) fn failing() -> Self {
        Self { files: Mutex::default(), fail: true }
    }

    pub(crate) fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files.lock().clone()
    }
}

impl ReportSink for MemorySink {
    fn save(&self, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        if self.fail {
            return Err(ProdboardError::Storage("disk full".into()));
        }
        self.files.lock().push((file_name.to_string(), content.to_vec()));
        Ok(PathBuf::from("reports").join(file_name))
    }
}

pub(crate) struct FixedClock(pub(crate) NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub(crate) struct Harness {
    pub(crate) client: SessionClient,
    pub(crate) transport: Arc<FakeTransport>,
    pub(crate) store: Arc<MemoryStore>,
    pub(crate) sink: Arc<MemorySink>,
}

pub(crate) fn harness(token: Option<&str>) -> Harness {
    harness_with_sink(token, MemorySink::default())
}

pub(crate) fn harness_with_sink(token: Option<&str>, sink: MemorySink) -> Harness {
    let transport = Arc::new(FakeTransport::default());
    let store = Arc::new(MemoryStore::default());
    if let Some(token) = token {
        store.save(token).unwrap();
    }
    let sink = Arc::new(sink);

    let client = SessionClient::builder()
        .transport(transport.clone())
        .token_store(store.clone())
        .report_sink(sink.clone())
        .clock(Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())))
        .build()
        .unwrap();

    Harness { client, transport, store, sink }
}

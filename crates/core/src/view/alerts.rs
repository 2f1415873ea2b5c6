//! Alert banner with timed auto-dismissal

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use prodboard_domain::constants::ALERT_TIMEOUT_SECS;
use prodboard_domain::Severity;
use tracing::{debug, info, warn};

use super::state::{Alert, ViewState};

/// Shows at most one alert at a time and removes it after a fixed delay
pub struct AlertCenter {
    state: Arc<Mutex<ViewState>>,
    next_id: AtomicU64,
    timeout: Duration,
}

impl AlertCenter {
    pub fn new(state: Arc<Mutex<ViewState>>) -> Self {
        Self::with_timeout(state, Duration::from_secs(ALERT_TIMEOUT_SECS))
    }

    pub fn with_timeout(state: Arc<Mutex<ViewState>>, timeout: Duration) -> Self {
        Self { state, next_id: AtomicU64::new(0), timeout }
    }

    /// Replace any visible alert with a new one and schedule its removal.
    ///
    /// Returns the id of the new alert.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let message = message.into();

        match severity {
            Severity::Danger | Severity::Warning => {
                warn!(alert_id = id, %severity, message = %message, "alert shown");
            }
            Severity::Success | Severity::Info => {
                info!(alert_id = id, %severity, message = %message, "alert shown");
            }
        }

        self.state.lock().alert = Some(Alert { id, message, severity });
        self.schedule_dismiss(id);
        id
    }

    /// Remove the visible alert, if any
    pub fn dismiss(&self) {
        self.state.lock().alert = None;
    }

    fn schedule_dismiss(&self, id: u64) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!(alert_id = id, "no async runtime; alert stays until replaced");
            return;
        };

        let state = Arc::downgrade(&self.state);
        let timeout = self.timeout;
        handle.spawn(async move {
            tokio::time::sleep(timeout).await;
            let Some(state) = state.upgrade() else { return };
            let mut state = state.lock();
            if state.alert.as_ref().is_some_and(|alert| alert.id == id) {
                state.alert = None;
                debug!(alert_id = id, "alert auto-dismissed");
            }
        });
    }
}

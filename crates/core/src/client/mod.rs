//! Session client: the single controller behind the dashboard
//!
//! Owns the [`Session`], the [`ViewState`] and the alert banner, and drives
//! every workflow (login, register, upload, report download, data loads)
//! through injected ports.
//!
//! Operations take `&self` and may run concurrently; view-state locks are
//! never held across an await, so the last response to arrive wins.

mod analytics;
mod auth;
mod reports;
mod upload;

use std::sync::Arc;

use parking_lot::Mutex;
use prodboard_domain::constants::SESSION_EXPIRED;
use prodboard_domain::{ProdboardError, Result, Severity, View};
use tracing::{debug, info, instrument, warn};

use crate::reports::{Clock, ReportSink, SystemClock};
use crate::session::{Session, TokenStore};
use crate::transport_ports::{ApiReply, ApiRequest, Transport, CONTENT_TYPE, JSON_CONTENT_TYPE};
use crate::view::{AlertCenter, ViewState};

/// Dashboard controller
pub struct SessionClient {
    transport: Arc<dyn Transport>,
    session: Session,
    state: Arc<Mutex<ViewState>>,
    alerts: AlertCenter,
    reports: Arc<dyn ReportSink>,
    clock: Arc<dyn Clock>,
}

impl SessionClient {
    /// Create a builder for fluent configuration
    pub fn builder() -> SessionClientBuilder {
        SessionClientBuilder::default()
    }

    /// Pick the initial view from the restored session.
    ///
    /// With a token the dashboard is shown and summary and performance are
    /// fetched concurrently; otherwise the login view is shown.
    #[instrument(skip(self))]
    pub async fn bootstrap(&self) {
        if self.session.is_authenticated() {
            info!("restored session; opening dashboard");
            self.state.lock().show_dashboard();
            self.refresh_dashboard().await;
        } else {
            debug!("no stored session; opening login");
            self.state.lock().show_login();
        }
    }

    /// Copy of the current view model
    pub fn snapshot(&self) -> ViewState {
        self.state.lock().clone()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn current_view(&self) -> View {
        self.state.lock().view
    }

    pub fn show_login(&self) {
        self.state.lock().show_login();
    }

    pub fn show_register(&self) {
        self.state.lock().show_register();
    }

    /// Switch to the dashboard. Refused (returns `false`) without a session.
    pub fn show_dashboard(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        self.state.lock().show_dashboard();
        true
    }

    /// Replace the visible alert; it auto-dismisses after five seconds
    pub fn show_alert(&self, message: impl Into<String>, severity: Severity) -> u64 {
        self.alerts.show(message, severity)
    }

    pub fn dismiss_alert(&self) {
        self.alerts.dismiss();
    }

    /// Send a JSON request with the session's bearer token attached.
    ///
    /// A 401 ends the session: the client logs out, shows the expiry warning
    /// and returns `Ok(None)`. Callers must not parse anything in that case.
    /// Any other status is handed back untouched.
    ///
    /// # Errors
    /// Returns the transport error when no response was received.
    #[instrument(skip(self, request), fields(path = %request.path))]
    pub async fn authed_request(&self, request: ApiRequest) -> Result<Option<ApiReply>> {
        let token = self.session.token();

        let mut request = request.with_default_header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(token) = token.as_deref() {
            request = request.with_bearer(token);
        }

        let reply = self.transport.send(request).await?;
        if !reply.is_unauthorized() {
            return Ok(Some(reply));
        }

        let ended_here = match token.as_deref() {
            Some(sent) => self.session.expire_if_current(sent),
            None => true,
        };
        if ended_here {
            warn!("backend rejected the session token");
            self.logout();
            self.alerts.show(SESSION_EXPIRED, Severity::Warning);
        } else {
            debug!("401 for a token that is no longer current; ignoring");
        }
        Ok(None)
    }

    fn bearer_request(&self, request: ApiRequest) -> ApiRequest {
        match self.session.token() {
            Some(token) => request.with_bearer(&token),
            None => request,
        }
    }
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("session", &self.session)
            .field("view", &self.current_view())
            .finish_non_exhaustive()
    }
}

/// Builder for [`SessionClient`]
#[derive(Default)]
pub struct SessionClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    token_store: Option<Arc<dyn TokenStore>>,
    report_sink: Option<Arc<dyn ReportSink>>,
    clock: Option<Arc<dyn Clock>>,
}

impl SessionClientBuilder {
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    pub fn report_sink(mut self, sink: Arc<dyn ReportSink>) -> Self {
        self.report_sink = Some(sink);
        self
    }

    /// Defaults to [`SystemClock`]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the client, restoring any persisted session
    ///
    /// # Errors
    /// Returns `ProdboardError::Config` if the transport, token store or
    /// report sink is missing.
    pub fn build(self) -> Result<SessionClient> {
        let transport = self
            .transport
            .ok_or_else(|| ProdboardError::Config("Transport not set".to_string()))?;
        let store = self
            .token_store
            .ok_or_else(|| ProdboardError::Config("Token store not set".to_string()))?;
        let reports = self
            .report_sink
            .ok_or_else(|| ProdboardError::Config("Report sink not set".to_string()))?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

        let state = Arc::new(Mutex::new(ViewState::default()));
        Ok(SessionClient {
            transport,
            session: Session::restore(store),
            alerts: AlertCenter::new(state.clone()),
            state,
            reports,
            clock,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing;

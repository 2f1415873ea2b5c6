//! Login, registration and logout

use prodboard_domain::constants::{
    CONNECTION_ERROR_PREFIX, LOGIN_ERROR_PREFIX, LOGIN_FALLBACK, LOGIN_MISSING_TOKEN,
    LOGIN_SUCCESS, MISSING_CREDENTIALS, MISSING_REGISTRATION_FIELDS, REGISTER_ERROR_PREFIX,
    REGISTER_FALLBACK, REGISTER_PATH, REGISTER_SUCCESS, TOKEN_PATH,
};
use prodboard_domain::{Credentials, ErrorDetail, Registration, Severity, TokenResponse};
use tracing::{info, instrument, warn};

use super::SessionClient;
use crate::transport_ports::{ApiReply, ApiRequest, CONTENT_TYPE, JSON_CONTENT_TYPE};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

impl SessionClient {
    /// Exchange credentials for a bearer token and open the dashboard.
    ///
    /// Returns `true` when a session was established. Failures are reported
    /// through the alert banner and leave the current view in place.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &Credentials) -> bool {
        if !credentials.is_complete() {
            self.alerts.show(MISSING_CREDENTIALS, Severity::Warning);
            return false;
        }

        let request = ApiRequest::post(TOKEN_PATH)
            .with_header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .form(credentials.form_fields());

        let reply = match self.transport.send(request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "login request failed");
                self.alerts.show(format!("{CONNECTION_ERROR_PREFIX}{}", err.message()), Severity::Danger);
                return false;
            }
        };

        if !reply.is_success() {
            warn!(status = reply.status, "login rejected");
            self.alerts.show(failure_message(LOGIN_ERROR_PREFIX, &reply, LOGIN_FALLBACK), Severity::Danger);
            return false;
        }

        let token = reply
            .json::<TokenResponse>()
            .ok()
            .and_then(|body| body.access_token)
            .filter(|token| !token.is_empty());
        let Some(token) = token else {
            warn!(status = reply.status, "login response carried no access token");
            self.alerts.show(format!("{LOGIN_ERROR_PREFIX}{LOGIN_MISSING_TOKEN}"), Severity::Danger);
            return false;
        };

        self.session.establish(token);
        info!("login succeeded");
        self.state.lock().show_dashboard();
        self.alerts.show(LOGIN_SUCCESS, Severity::Success);
        self.refresh_dashboard().await;
        true
    }

    /// Create an account. Does not log in.
    ///
    /// On success the registration draft is cleared and the login view shown.
    #[instrument(skip(self, registration), fields(username = %registration.username))]
    pub async fn register(&self, registration: &Registration) -> bool {
        if !registration.is_complete() {
            self.alerts.show(MISSING_REGISTRATION_FIELDS, Severity::Warning);
            return false;
        }

        let payload = serde_json::json!({
            "username": registration.username,
            "email": registration.email,
            "full_name": registration.full_name,
            "password": registration.password,
        });
        let request = ApiRequest::post(REGISTER_PATH)
            .with_header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(payload);

        let reply = match self.transport.send(request).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "registration request failed");
                self.alerts.show(format!("{CONNECTION_ERROR_PREFIX}{}", err.message()), Severity::Danger);
                return false;
            }
        };

        if !reply.is_success() {
            warn!(status = reply.status, "registration rejected");
            self.alerts.show(
                failure_message(REGISTER_ERROR_PREFIX, &reply, REGISTER_FALLBACK),
                Severity::Danger,
            );
            return false;
        }

        info!("account registered");
        {
            let mut state = self.state.lock();
            state.registration_draft = Registration::default();
            state.show_login();
        }
        self.alerts.show(REGISTER_SUCCESS, Severity::Success);
        true
    }

    /// Keep the registration form contents between calls
    pub fn set_registration_draft(&self, draft: Registration) {
        self.state.lock().registration_draft = draft;
    }

    /// End the session and return to the login view. Idempotent.
    pub fn logout(&self) {
        self.session.clear();
        let mut state = self.state.lock();
        state.user = None;
        state.show_login();
    }
}

fn failure_message(prefix: &str, reply: &ApiReply, fallback: &str) -> String {
    let detail = ErrorDetail::from_body(&reply.body);
    format!("{prefix}{}", detail.as_deref().unwrap_or(fallback))
}

#[cfg(test)]
mod tests {
    use prodboard_domain::View;

    use super::super::testing::{harness, Harness};
    use super::*;
    use crate::transport_ports::{RequestBody, AUTHORIZATION};

    fn dashboard_routes(harness: &Harness) {
        harness.transport.respond("/analytics/summary", 200, r#"{"summary":{}}"#);
        harness.transport.respond("/analytics/performance", 200, "[]");
    }

    #[tokio::test]
    async fn login_success_stores_token_and_loads_dashboard() {
        let h = harness(None);
        h.transport.respond(TOKEN_PATH, 200, r#"{"access_token":"abc","token_type":"bearer"}"#);
        dashboard_routes(&h);

        assert!(h.client.login(&Credentials::new("ana", "secreto")).await);

        assert_eq!(h.store.value().as_deref(), Some("abc"));
        let state = h.client.snapshot();
        assert_eq!(state.view, View::Dashboard);
        assert!(state.nav.logout_visible);
        assert_eq!(state.alert.map(|a| a.message).as_deref(), Some(LOGIN_SUCCESS));

        let sent = h.transport.requests();
        assert_eq!(sent[0].path, TOKEN_PATH);
        assert_eq!(sent[0].header(CONTENT_TYPE), Some(FORM_CONTENT_TYPE));
        assert_eq!(sent[0].header(AUTHORIZATION), None);
        assert_eq!(
            sent[0].body,
            RequestBody::Form(vec![
                ("username".into(), "ana".into()),
                ("password".into(), "secreto".into()),
            ])
        );
        assert_eq!(sent.len(), 3);
        assert!(sent[1..].iter().all(|r| r.header(AUTHORIZATION) == Some("Bearer abc")));
    }

    #[tokio::test]
    async fn login_failure_uses_server_detail() {
        let h = harness(None);
        h.transport.respond(TOKEN_PATH, 401, r#"{"detail":"Usuario inactivo"}"#);

        assert!(!h.client.login(&Credentials::new("ana", "x")).await);

        let state = h.client.snapshot();
        assert_eq!(state.view, View::Login);
        let alert = state.alert.unwrap();
        assert_eq!(alert.message, "Error de login: Usuario inactivo");
        assert_eq!(alert.severity, Severity::Danger);
        assert_eq!(h.store.value(), None);
    }

    #[tokio::test]
    async fn login_failure_without_detail_uses_fallback() {
        let h = harness(None);
        h.transport.respond(TOKEN_PATH, 500, "Internal Server Error");

        h.client.login(&Credentials::new("ana", "x")).await;
        assert_eq!(
            h.client.snapshot().alert.unwrap().message,
            "Error de login: Credenciales incorrectas"
        );
    }

    #[tokio::test]
    async fn login_without_access_token_is_a_failure() {
        let h = harness(None);
        h.transport.respond(TOKEN_PATH, 200, r#"{"token_type":"bearer"}"#);

        assert!(!h.client.login(&Credentials::new("ana", "x")).await);
        assert!(!h.client.is_authenticated());
        assert_eq!(h.client.current_view(), View::Login);
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn login_network_error_shows_connection_alert() {
        let h = harness(None);

        assert!(!h.client.login(&Credentials::new("ana", "x")).await);
        let alert = h.client.snapshot().alert.unwrap();
        assert!(alert.message.starts_with(CONNECTION_ERROR_PREFIX));
        assert_eq!(alert.severity, Severity::Danger);
    }

    #[tokio::test]
    async fn empty_credentials_never_reach_the_network() {
        let h = harness(None);

        assert!(!h.client.login(&Credentials::new("  ", "x")).await);
        assert!(h.transport.requests().is_empty());
        let alert = h.client.snapshot().alert.unwrap();
        assert_eq!(alert.message, MISSING_CREDENTIALS);
        assert_eq!(alert.severity, Severity::Warning);
    }

    #[tokio::test]
    async fn login_then_logout_clears_durable_token() {
        let h = harness(None);
        h.transport.respond(TOKEN_PATH, 200, r#"{"access_token":"abc"}"#);
        dashboard_routes(&h);

        h.client.login(&Credentials::new("ana", "x")).await;
        h.client.logout();
        h.client.logout();

        assert_eq!(h.store.value(), None);
        let state = h.client.snapshot();
        assert_eq!(state.view, View::Login);
        assert!(state.nav.login_visible);
        assert!(!state.nav.logout_visible);
    }

    fn registration() -> Registration {
        Registration {
            username: "ana".into(),
            email: "ana@example.com".into(),
            full_name: "Ana Pérez".into(),
            password: "secreto".into(),
        }
    }

    #[tokio::test]
    async fn register_success_clears_draft_and_shows_login() {
        let h = harness(None);
        h.transport.respond(REGISTER_PATH, 201, r#"{"id":1}"#);
        h.client.set_registration_draft(registration());
        h.client.show_register();

        assert!(h.client.register(&registration()).await);

        let state = h.client.snapshot();
        assert_eq!(state.view, View::Login);
        assert_eq!(state.registration_draft, Registration::default());
        assert_eq!(state.alert.unwrap().message, REGISTER_SUCCESS);
        assert!(!h.client.is_authenticated());

        let sent = &h.transport.requests()[0];
        let RequestBody::Json(body) = &sent.body else { panic!("expected JSON body") };
        assert_eq!(body["full_name"], "Ana Pérez");
        assert_eq!(body["email"], "ana@example.com");
    }

    #[tokio::test]
    async fn register_failure_keeps_view() {
        let h = harness(None);
        h.transport.respond(REGISTER_PATH, 400, r#"{"detail":"Username already registered"}"#);
        h.client.show_register();

        assert!(!h.client.register(&registration()).await);

        let state = h.client.snapshot();
        assert_eq!(state.view, View::Register);
        assert_eq!(state.alert.unwrap().message, "Error de registro: Username already registered");
    }

    #[tokio::test]
    async fn incomplete_registration_is_rejected_locally() {
        let h = harness(None);
        let mut incomplete = registration();
        incomplete.email.clear();

        assert!(!h.client.register(&incomplete).await);
        assert!(h.transport.requests().is_empty());
        assert_eq!(h.client.snapshot().alert.unwrap().severity, Severity::Warning);
    }
}

use std::time::Duration;

use async_trait::async_trait;
use prodboard_core::transport_ports::{ApiReply, ApiRequest, Method, RequestBody, Transport};
use prodboard_domain::constants::API_BASE_PATH;
use prodboard_domain::{ApiConfig, ProdboardError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::api::{ApiError, ApiErrorCategory};
use crate::errors::to_domain;

/// reqwest-backed [`Transport`] rooted at `<base_url>/api/v1`.
///
/// Sends each request exactly once and returns every status code to the
/// caller; only a missing response is an error.
#[derive(Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
    api_root: String,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Start building a new transport.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    /// Transport configured from the `[api]` section.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut builder = Self::builder().base_url(&config.base_url);
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    /// Absolute URL of an API path such as `/analytics/summary`.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{path}", self.api_root))
            .map_err(|e| ProdboardError::InvalidInput(format!("invalid request path {path}: {e}")))
    }

    fn prepare(&self, request: ApiRequest) -> Result<RequestBuilder> {
        let url = self.url_for(&request.path)?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart { field, file } => {
                let part = Part::bytes(file.content).file_name(file.file_name);
                builder.multipart(Form::new().part(field, part))
            }
        };
        Ok(builder)
    }

    fn request_failed(&self, method: Method, path: &str, err: reqwest::Error) -> ProdboardError {
        let err = match self.timeout {
            Some(limit) if err.is_timeout() => ApiError::Timeout(limit),
            _ => ApiError::from(err),
        };
        debug!(?method, %path, category = ?err.category(), error = %err, "HTTP request failed");
        err.into()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply> {
        let method = request.method;
        let path = request.path.clone();
        let builder = self.prepare(request)?;

        debug!(?method, %path, "sending HTTP request");
        let response =
            builder.send().await.map_err(|err| self.request_failed(method, &path, err))?;

        let status = response.status().as_u16();
        match ApiErrorCategory::from_status(status) {
            Some(category) => debug!(?method, %path, status, ?category, "received HTTP error status"),
            None => debug!(?method, %path, status, "received HTTP response"),
        }

        let body =
            response.bytes().await.map_err(|err| self.request_failed(method, &path, err))?;
        Ok(ApiReply::new(status, body.to_vec()))
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").field("api_root", &self.api_root).finish_non_exhaustive()
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Default)]
pub struct HttpTransportBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpTransportBuilder {
    /// Server origin without the API prefix, e.g. `http://localhost:8000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overall request timeout. Unset means reqwest's default (none).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        let base = self
            .base_url
            .ok_or_else(|| ProdboardError::Config("API base URL not set".to_string()))?;
        let parsed = Url::parse(&base)
            .map_err(|e| ProdboardError::Config(format!("Invalid API base URL {base}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ProdboardError::Config(format!(
                "Unsupported API URL scheme: {}",
                parsed.scheme()
            )));
        }

        let mut builder = ReqwestClient::builder().no_proxy();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(to_domain)?;

        Ok(HttpTransport {
            client,
            api_root: format!("{}{API_BASE_PATH}", base.trim_end_matches('/')),
            timeout: self.timeout,
        })
    }
}

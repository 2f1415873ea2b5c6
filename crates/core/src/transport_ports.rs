//! Port interface for reaching the dashboard backend
//!
//! Requests are described with plain data so the client logic can be driven
//! by the reqwest transport in production and by recording fakes in tests.

use async_trait::async_trait;
use prodboard_domain::{FileSelection, ProdboardError, Result};
use serde::de::DeserializeOwned;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP verbs used by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Request payload
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded` fields
    Form(Vec<(String, String)>),
    /// Single-file `multipart/form-data` body
    Multipart { field: String, file: FileSelection },
}

/// A request relative to the API base path (`/api/v1`)
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Set a header, replacing any existing value (names compare case-insensitively)
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Set a header only when the caller has not supplied one
    pub fn with_default_header(self, name: &str, value: impl Into<String>) -> Self {
        if self.header(name).is_some() {
            self
        } else {
            self.with_header(name, value)
        }
    }

    pub fn with_bearer(self, token: &str) -> Self {
        self.with_header(AUTHORIZATION, format!("Bearer {token}"))
    }

    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(fields);
        self
    }

    pub fn multipart(mut self, field: impl Into<String>, file: FileSelection) -> Self {
        self.body = RequestBody::Multipart { field: field.into(), file };
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status code plus the undecoded body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    pub const fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Decode the body as JSON
    ///
    /// # Errors
    /// Returns `ProdboardError::InvalidInput` when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            ProdboardError::InvalidInput(format!(
                "unexpected response body (status {}): {e}",
                self.status
            ))
        })
    }
}

/// Sends requests to the backend
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single request. No retries.
    ///
    /// # Errors
    /// Returns `ProdboardError::Network` when no response was received.
    async fn send(&self, request: ApiRequest) -> Result<ApiReply>;
}

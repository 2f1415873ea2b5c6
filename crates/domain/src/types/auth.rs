//! Authentication payloads
//!
//! Login credentials, registration data, the issued token and the profile of
//! the signed-in user.

use serde::{Deserialize, Serialize};

/// Username/password pair submitted to the token endpoint as a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Both fields carry non-whitespace content
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }

    /// Form fields in submission order
    pub fn form_fields(&self) -> Vec<(String, String)> {
        vec![
            ("username".to_string(), self.username.clone()),
            ("password".to_string(), self.password.clone()),
        ]
    }
}

/// New-account payload for `POST /auth/register`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
}

impl Registration {
    pub fn is_complete(&self) -> bool {
        [&self.username, &self.email, &self.full_name].iter().all(|f| !f.trim().is_empty())
            && !self.password.is_empty()
    }
}

/// Token endpoint response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error body shape shared by every endpoint: `{ "detail": "..." }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorDetail {
    /// Extract the `detail` string from a raw error body.
    ///
    /// Bodies that are not JSON, lack `detail`, or carry a non-string detail
    /// (such as a list of validation errors) yield `None`.
    pub fn from_body(body: &[u8]) -> Option<String> {
        let parsed: Self = serde_json::from_slice(body).ok()?;
        match parsed.detail? {
            serde_json::Value::String(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Profile returned by `GET /auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserProfile {
    /// Name shown in the dashboard header
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or(&self.username)
    }
}

const fn default_true() -> bool {
    true
}

//! View and alert identifiers

use serde::{Deserialize, Serialize};

use crate::impl_identifier_conversions;

/// The three mutually exclusive top-level views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Login,
    Register,
    Dashboard,
}

impl_identifier_conversions!(View {
    Login => "login",
    Register => "register",
    Dashboard => "dashboard",
});

/// Alert banner severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Danger,
}

impl_identifier_conversions!(Severity {
    Success => "success",
    Info => "info",
    Warning => "warning",
    Danger => "danger",
});

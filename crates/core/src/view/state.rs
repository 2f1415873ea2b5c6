//! Headless view state
//!
//! Everything the dashboard page would display, held as plain data. The
//! controller mutates it; rendering targets read a snapshot.

use prodboard_domain::{FileSelection, Registration, Severity, UploadResult, UserProfile, View};
use serde::Serialize;

use super::render::{SummaryView, Table};

/// Visibility of the header login/logout buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavButtons {
    pub login_visible: bool,
    pub logout_visible: bool,
}

impl Default for NavButtons {
    fn default() -> Self {
        Self { login_visible: true, logout_visible: false }
    }
}

/// The single dismissible alert banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Monotonic id; auto-dismiss timers only remove the alert they were
    /// scheduled for
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Upload result region below the upload form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UploadPanel {
    #[default]
    Idle,
    Busy,
    Imported { result: UploadResult },
    Failed { message: String },
}

/// Complete view model of the dashboard client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub view: View,
    pub nav: NavButtons,
    pub alert: Option<Alert>,
    pub summary: SummaryView,
    pub categories: Table,
    pub top_products: Table,
    pub performance: Table,
    pub revenue_trends: Table,
    pub import_history: Table,
    pub upload: UploadPanel,
    #[serde(skip)]
    pub selected_file: Option<FileSelection>,
    #[serde(skip)]
    pub registration_draft: Registration,
    pub user: Option<UserProfile>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            view: View::Login,
            nav: NavButtons::default(),
            alert: None,
            summary: SummaryView::default(),
            categories: Table::categories(),
            top_products: Table::top_products(),
            performance: Table::performance(),
            revenue_trends: Table::revenue_trends(),
            import_history: Table::import_history(),
            upload: UploadPanel::Idle,
            selected_file: None,
            registration_draft: Registration::default(),
            user: None,
        }
    }
}

impl ViewState {
    pub fn show_login(&mut self) {
        self.view = View::Login;
        self.nav = NavButtons { login_visible: true, logout_visible: false };
    }

    /// Registration form; header buttons keep their current visibility
    pub fn show_register(&mut self) {
        self.view = View::Register;
    }

    pub fn show_dashboard(&mut self) {
        self.view = View::Dashboard;
        self.nav = NavButtons { login_visible: false, logout_visible: true };
    }

    pub fn alert_severity(&self) -> Option<Severity> {
        self.alert.as_ref().map(|a| a.severity)
    }
}

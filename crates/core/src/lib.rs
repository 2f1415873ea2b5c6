//! # Prodboard Core
//!
//! Client logic for the production/sales dashboard - no infrastructure
//! dependencies.
//!
//! This crate contains:
//! - The [`SessionClient`] controller and its workflows
//! - Port interfaces (traits) for transport, token storage and report saving
//! - The headless view model and its pure render functions
//!
//! ## Architecture Principles
//! - Only depends on `prodboard-domain`
//! - No HTTP, filesystem or keychain code
//! - All external dependencies via traits

pub mod client;
pub mod reports;
pub mod session;
pub mod transport_ports;
pub mod view;

pub use client::{SessionClient, SessionClientBuilder};
pub use reports::{Clock, ReportSink, SystemClock};
pub use session::{Session, TokenStore};
pub use transport_ports::{ApiReply, ApiRequest, Method, RequestBody, Transport};
pub use view::{Alert, NavButtons, Table, TableRow, UploadPanel, ViewState};

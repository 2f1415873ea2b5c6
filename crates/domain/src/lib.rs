//! # Prodboard Domain
//!
//! Business domain types for the production/sales analytics dashboard client.
//!
//! This crate contains:
//! - Analytics, upload, report and user data types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Endpoint paths and user-facing messages
//!
//! ## Architecture
//! - No dependencies on other Prodboard crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

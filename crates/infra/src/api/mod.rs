//! API error classification

pub mod errors;

pub use errors::{ApiError, ApiErrorCategory};

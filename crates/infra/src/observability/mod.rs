//! Observability infrastructure
//!
//! Structured logging through `tracing`; everything else in the workspace
//! only emits events and spans.

pub mod logging;

pub use logging::{env_filter, init_logging};

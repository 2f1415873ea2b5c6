//! Report download support

pub mod ports;

pub use ports::{Clock, ReportSink, SystemClock};

//! Core logger types and traits

pub mod caller;
pub mod color;
pub mod emitter;
pub mod error;
pub mod fields;
pub mod global;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use caller::CallSite;
pub use error::{LoggerError, Result};
pub use fields::fields;
pub use global::default_logger;
pub use logger::{normalize_prefix, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use sink::Sink;
pub use timestamp::{format_timestamp, Clock, FixedClock, SystemClock};

//! # stderr_logger
//!
//! A small line logger for standard error.
//!
//! Every line starts with a severity letter and a `MM-DD hh:mm:ss.mmm` local
//! timestamp. Warning and error lines are highlighted and tagged with the
//! `file(line)` of the code that logged them:
//!
//! ```text
//! I 01-02 03:04:05.006] svc started
//! W 01-02 03:04:05.007] main.rs(42): svc disk almost full
//! ```
//!
//! Use the free functions (or [`default_logger`]) for the shared unprefixed
//! logger, or build a [`Logger`] with its own prefix:
//!
//! ```
//! use stderr_logger::{fields, infof, warning, Logger};
//!
//! stderr_logger::info(&[&"booting", &"v1"]);
//!
//! let logger = Logger::new("worker");
//! infof!(logger, "picked job {}\n", 7);
//! warning!(logger, "retrying", fields!("attempt", 2, "of", 5));
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        default_logger, fields, CallSite, Clock, FixedClock, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Result, Severity, Sink, SystemClock,
    };
    pub use crate::sinks::{MemorySink, StderrSink, WriterSink};
}

pub use crate::core::global::{error, errorf, info, infof, log, warning, warningf};
pub use crate::core::{
    default_logger, format_timestamp, normalize_prefix, CallSite, Clock, FixedClock, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, Result, Severity, Sink, SystemClock,
};
pub use crate::sinks::{MemorySink, StderrSink, WriterSink};

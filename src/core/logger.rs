//! Logger handle

use super::{
    emitter::{emit, join_values},
    metrics::LoggerMetrics,
    severity::Severity,
    sink::Sink,
    timestamp::{Clock, SystemClock},
};
use crate::sinks::StderrSink;
use std::fmt::{self, Display};
use std::panic::Location;
use std::sync::Arc;

/// A prefixed handle onto a shared sink.
///
/// Cloning is cheap: clones share the sink, the clock and the metrics.
/// The prefix and sink never change after construction.
///
/// Every logging method is `#[track_caller]`, so warning and error lines
/// point at the code that called the method, whether it was called on a
/// constructed handle or through the process-wide free functions.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Sink>,
    prefix: String,
    clock: Arc<dyn Clock>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a logger writing to standard error with the given prefix.
    ///
    /// A non-empty prefix that does not end in a space gets one appended.
    ///
    /// ```
    /// use stderr_logger::Logger;
    ///
    /// assert_eq!(Logger::new("svc").prefix(), "svc ");
    /// assert_eq!(Logger::new("svc ").prefix(), "svc ");
    /// assert_eq!(Logger::new("").prefix(), "");
    /// ```
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::builder().prefix(prefix).build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Emit `message` verbatim at `severity`.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl AsRef<str>) {
        let location = Location::caller();
        emit(
            self.sink.as_ref(),
            &self.metrics,
            severity,
            &self.prefix,
            message.as_ref(),
            Some(location),
            self.clock.now(),
        );
    }

    /// Space-join `values` and log them as one newline-terminated info line.
    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) {
        self.log(Severity::Info, join_values(values));
    }

    /// Log a formatted info message; no newline is added.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, fmt::format(args));
    }

    #[track_caller]
    pub fn warning(&self, values: &[&dyn Display]) {
        self.log(Severity::Warning, join_values(values));
    }

    #[track_caller]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, fmt::format(args));
    }

    #[track_caller]
    pub fn error(&self, values: &[&dyn Display]) {
        self.log(Severity::Error, join_values(values));
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, fmt::format(args));
    }

    /// Flush the sink. Errors are counted, not returned.
    pub fn flush(&self) {
        if self.sink.flush().is_err() {
            self.metrics.record_failed_write();
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.sink.name())
            .field("prefix", &self.prefix)
            .finish()
    }
}

/// Append a single space to a non-empty prefix that lacks one
pub fn normalize_prefix(prefix: impl Into<String>) -> String {
    let mut prefix = prefix.into();
    if !prefix.is_empty() && !prefix.ends_with(' ') {
        prefix.push(' ');
    }
    prefix
}

/// Builder for [`Logger`]
///
/// # Example
///
/// ```
/// use stderr_logger::{Logger, MemorySink};
/// use std::sync::Arc;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .prefix("worker")
///     .sink(Arc::new(sink.clone()))
///     .build();
///
/// logger.info(&[&"started"]);
/// assert!(sink.contents().ends_with("] worker started\n"));
/// ```
pub struct LoggerBuilder {
    prefix: String,
    sink: Option<Arc<dyn Sink>>,
    clock: Option<Arc<dyn Clock>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            sink: None,
            clock: None,
        }
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Write to `sink` instead of standard error
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Stamp lines using `clock` instead of the local system clock
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            sink: self.sink.unwrap_or_else(|| Arc::new(StderrSink)),
            prefix: normalize_prefix(self.prefix),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

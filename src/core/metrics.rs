//! Logger metrics for observability
//!
//! Write failures are never returned to callers; they are counted here
//! instead.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by every clone of a [`Logger`](crate::Logger)
///
/// # Example
///
/// ```
/// use stderr_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_logged();
/// metrics.record_failed_write();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines handed to the sink successfully
    total_logged: AtomicU64,

    /// Lines the sink refused
    failed_writes: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) {
        self.total_logged.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_failed_write(&self) {
        self.failed_writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Fraction of attempted lines that failed, 0.0 when nothing was attempted
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_writes() as f64;
        let total = failed + self.total_logged() as f64;
        if total == 0.0 {
            0.0
        } else {
            failed / total
        }
    }
}

//! Line rendering and emission
//!
//! Info lines:
//!
//! ```text
//! I MM-DD hh:mm:ss.mmm] <prefix><message>
//! ```
//!
//! Warning and error lines, with the header in red and the call site in cyan:
//!
//! ```text
//! W MM-DD hh:mm:ss.mmm] file.rs(42): <prefix><message>
//! ```

use super::{
    caller::CallSite,
    color::{CYAN, RED, RESET},
    metrics::LoggerMetrics,
    severity::Severity,
    sink::Sink,
    timestamp::format_timestamp,
};
use chrono::{DateTime, Local};
use std::fmt::{Display, Write};
use std::panic::Location;

/// Render one line.
///
/// `site` is only consulted for annotated severities; when it is `None` the
/// `???(1)` fallback is printed. The message is copied verbatim.
pub fn format_line(
    severity: Severity,
    timestamp: &str,
    site: Option<CallSite<'_>>,
    prefix: &str,
    message: &str,
) -> String {
    let mut line = String::with_capacity(48 + prefix.len() + message.len());

    // Writing into a String cannot fail
    if severity.is_annotated() {
        let site = site.unwrap_or_else(CallSite::unknown);
        let _ = write!(
            line,
            "{}{} {}]{} {}:{} {}{}",
            RED, severity, timestamp, CYAN, site, RESET, prefix, message
        );
    } else {
        let _ = write!(line, "{} {}] {}{}", severity, timestamp, prefix, message);
    }

    line
}

/// Space-join values and terminate with a single newline
pub fn join_values(values: &[&dyn Display]) -> String {
    let mut out = String::new();

    for (idx, value) in values.iter().enumerate() {
        if idx != 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", value);
    }
    out.push('\n');

    out
}

/// Render and write one line to `sink`.
///
/// Never fails: a refused write only bumps `metrics`.
pub fn emit(
    sink: &dyn Sink,
    metrics: &LoggerMetrics,
    severity: Severity,
    prefix: &str,
    message: &str,
    location: Option<&Location<'_>>,
    now: DateTime<Local>,
) {
    let site = if severity.is_annotated() {
        Some(CallSite::resolve(location))
    } else {
        None
    };
    let line = format_line(severity, &format_timestamp(&now), site, prefix, message);

    match sink.write_all(line.as_bytes()) {
        Ok(()) => metrics.record_logged(),
        Err(_) => metrics.record_failed_write(),
    }
}

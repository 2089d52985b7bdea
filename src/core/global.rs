//! Process-wide default logger
//!
//! The default logger writes to standard error with an empty prefix. It is
//! created on first use and lives for the rest of the process. The free
//! functions here forward to it and report their own caller as the call
//! site.

use super::{logger::Logger, severity::Severity};
use once_cell::sync::Lazy;
use std::fmt::{self, Display};

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(""));

/// The shared default logger
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

#[track_caller]
pub fn log(severity: Severity, message: impl AsRef<str>) {
    DEFAULT_LOGGER.log(severity, message);
}

#[track_caller]
pub fn info(values: &[&dyn Display]) {
    DEFAULT_LOGGER.info(values);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.infof(args);
}

#[track_caller]
pub fn warning(values: &[&dyn Display]) {
    DEFAULT_LOGGER.warning(values);
}

#[track_caller]
pub fn warningf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.warningf(args);
}

#[track_caller]
pub fn error(values: &[&dyn Display]) {
    DEFAULT_LOGGER.error(values);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    DEFAULT_LOGGER.errorf(args);
}

//! Logging macros.
//!
//! The plain macros take a logger followed by any number of `Display`
//! values, which are space-joined and newline-terminated. The `f` variants
//! take a logger followed by `format!` arguments and add no newline.
//!
//! # Examples
//!
//! ```
//! use stderr_logger::{default_logger, error, infof, Logger};
//!
//! let logger = Logger::new("server");
//!
//! let port = 8080;
//! infof!(logger, "listening on port {}\n", port);
//!
//! error!(default_logger(), "bind failed on", port);
//! ```

/// Log space-joined values at info severity.
///
/// ```
/// # use stderr_logger::Logger;
/// use stderr_logger::info;
/// let logger = Logger::new("");
/// info!(logger, "processed", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log space-joined values at warning severity.
#[macro_export]
macro_rules! warning {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.warning(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log space-joined values at error severity.
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.error(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log a formatted message at info severity.
///
/// ```
/// # use stderr_logger::Logger;
/// use stderr_logger::infof;
/// let logger = Logger::new("");
/// infof!(logger, "x={}\n", 3);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at warning severity.
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at error severity.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Render alternating keys and values as colored `key=value` pairs.
///
/// ```
/// use stderr_logger::{core::color::strip_ansi, fields};
///
/// let rendered = fields!("user", 42, "action", "login");
/// assert_eq!(strip_ansi(&rendered), "user=42 action=login");
/// ```
#[macro_export]
macro_rules! fields {
    ($($value:expr),* $(,)?) => {
        $crate::core::fields::fields(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

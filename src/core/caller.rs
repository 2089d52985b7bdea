//! Call-site resolution for warning and error lines

use std::fmt;
use std::panic::Location;

/// File name shown when the call site cannot be resolved
pub const UNKNOWN_FILE: &str = "???";
/// Line shown when the call site cannot be resolved
pub const UNKNOWN_LINE: u32 = 1;

/// The `file(line)` pair printed on annotated lines.
///
/// `file` is already reduced to its final path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub const fn unknown() -> Self {
        Self {
            file: UNKNOWN_FILE,
            line: UNKNOWN_LINE,
        }
    }

    /// Resolve a captured location, falling back to `???(1)`.
    pub fn resolve(location: Option<&'a Location<'a>>) -> Self {
        match location {
            Some(location) => Self {
                file: basename(location.file()),
                line: location.line(),
            },
            None => Self::unknown(),
        }
    }
}

impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.file, self.line)
    }
}

/// Strip everything up to and including the last path separator
pub fn basename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

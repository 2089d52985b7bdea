//! Standard error sink

use crate::core::{Result, Sink};
use std::io::Write;

/// Writes lines to the process's standard error.
///
/// Each line is written while holding the stderr lock, so lines from
/// concurrent callers do not interleave. The stream itself belongs to the
/// process and is never closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for StderrSink {
    fn write_all(&self, buf: &[u8]) -> Result<()> {
        std::io::stderr().lock().write_all(buf)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stderr"
    }
}

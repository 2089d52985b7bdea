//! Sink over any `std::io::Write`

use crate::core::{LoggerError, Result, Sink};
use parking_lot::{Mutex, MutexGuard};
use std::io::Write;

/// Serializes writes to an arbitrary writer behind a mutex.
///
/// Useful for pointing a logger at a file or a pipe opened by the
/// application. The sink does not flush after every line; call
/// [`Sink::flush`] (or `Logger::flush`) when needed.
pub struct WriterSink<W: Write + Send> {
    name: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named("writer", writer)
    }

    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Borrow the wrapped writer
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_all(&self, buf: &[u8]) -> Result<()> {
        self.writer
            .lock()
            .write_all(buf)
            .map_err(|e| {
                let message = format!("sink '{}' rejected the line: {}", self.name, e);
                LoggerError::io_operation("writing log line", message, e)
            })
    }

    fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| {
                let message = format!("sink '{}' failed to flush: {}", self.name, e);
                LoggerError::io_operation("flushing sink", message, e)
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

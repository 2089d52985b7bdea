//! Sink trait for log output destinations

use super::error::Result;

/// A destination for rendered log lines.
///
/// The emitter renders one complete line and hands it over in a single
/// [`Sink::write_all`] call. Implementations must write that buffer
/// atomically with respect to other callers (for example behind a lock),
/// otherwise lines written from several threads may interleave.
///
/// Sinks are shared by reference between loggers and are never closed by
/// them.
pub trait Sink: Send + Sync {
    fn write_all(&self, buf: &[u8]) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}

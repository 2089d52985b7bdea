//! In-memory sink

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines in a shared buffer.
///
/// Clones share the same buffer, so one clone can be handed to a logger
/// while another is kept to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_all(&self, buf: &[u8]) -> Result<()> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

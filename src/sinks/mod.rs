//! Sink implementations

pub mod memory;
pub mod stderr;
pub mod writer;

pub use memory::MemorySink;
pub use stderr::StderrSink;
pub use writer::WriterSink;

pub use crate::core::Sink;

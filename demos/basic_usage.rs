//! Basic logger usage example
//!
//! Demonstrates the default logger, a prefixed logger and inline fields.
//!
//! Run with: cargo run --example basic_usage

use stderr_logger::prelude::*;
use stderr_logger::{error, errorf, fields, info, infof, warning, warningf};

fn main() {
    println!("=== stderr_logger - Basic Usage Example ===\n");

    // Process-wide default logger, no prefix
    println!("1. Default logger:");
    stderr_logger::info(&[&"application", &"starting"]);
    stderr_logger::warningf(format_args!("config file {} not found, using defaults\n", "app.toml"));

    // A logger with its own prefix
    println!("\n2. Prefixed logger:");
    let logger = Logger::new("worker");
    info!(logger, "picked up job", 17);
    infof!(logger, "job {} took {}ms\n", 17, 42);
    warning!(logger, "queue depth", 900);
    warningf!(logger, "retry {} of {}\n", 2, 5);
    error!(logger, "job", 18, "failed");
    errorf!(logger, "giving up after {} attempts\n", 5);

    // Key/value fields embedded in a message
    println!("\n3. Inline fields:");
    info!(logger, "request", fields!("method", "GET", "status", 200, "ms", 12));

    // The same macros work on the default logger
    println!("\n4. Default logger through macros:");
    error!(default_logger(), "shutting down");

    println!("\n=== Example completed successfully! ===");
}

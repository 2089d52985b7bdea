//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Lines written from many threads through one sink stay whole
//! - Every line is accounted for in the metrics

use stderr_logger::core::color::strip_ansi;
use stderr_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 250;

#[test]
fn test_concurrent_lines_stay_whole() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .prefix("stress")
        .sink(Arc::new(sink.clone()))
        .build();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    if i % 2 == 0 {
                        logger.infof(format_args!("thread={} seq={} payload=abcdefghij\n", t, i));
                    } else {
                        logger.warningf(format_args!("thread={} seq={} payload=abcdefghij\n", t, i));
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    for line in &lines {
        let plain = strip_ansi(line);
        assert!(
            plain.starts_with("I ") || plain.starts_with("W "),
            "corrupted line: {:?}",
            plain
        );
        assert!(plain.contains("] ") && plain.contains("stress thread="));
        assert!(plain.ends_with(" payload=abcdefghij"), "corrupted line: {:?}", plain);
    }

    assert_eq!(
        logger.metrics().total_logged(),
        (THREADS * LINES_PER_THREAD) as u64
    );
}

#[test]
fn test_concurrent_writes_to_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");
    let file = std::fs::File::create(&log_file).expect("Failed to create log file");

    let logger = Logger::builder()
        .sink(Arc::new(WriterSink::new(file)))
        .build();

    thread::scope(|scope| {
        for t in 0..THREADS {
            let logger = &logger;
            scope.spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    logger.error(&[&"thread", &t, &"seq", &i]);
                }
            });
        }
    });
    logger.flush();

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    for line in lines {
        let plain = strip_ansi(line);
        assert!(plain.starts_with("E "), "corrupted line: {:?}", plain);
        assert!(plain.contains("stress_tests.rs("), "corrupted line: {:?}", plain);
    }
}

//! Tests for the error module.
//!
//! This module contains tests for error conversion, context and reporting.

use crate::error::{
    report_error, set_error_reporter, CollectionError, ConfigError, ErrorContext, ErrorReporter,
    MaukaError, TracingErrorReporter,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = MaukaError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that component errors convert into the top-level error.
#[test]
fn test_error_conversions() {
    let error: MaukaError = CollectionError::empty("remove root").into();
    assert!(matches!(error, MaukaError::Collection(CollectionError::EmptyContainer { .. })));
    assert!(error.to_string().contains("cannot remove root"));

    let error: MaukaError = ConfigError::ValidationError("bad level".to_string()).into();
    assert!(error.to_string().starts_with("Configuration error"));

    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = MaukaError::from(io_error);
    assert!(error.to_string().contains("file not found"));
}

/// Reporter that records every context it receives.
#[derive(Debug, Default)]
struct RecordingReporter {
    reported: Mutex<Vec<String>>,
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, context: ErrorContext) {
        self.reported.lock().push(context.to_string());
    }
}

/// Test that the process-wide error reporter receives reported errors.
///
/// Note: This is the only test that installs a reporter, since the slot is global.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(RecordingReporter::default());
    set_error_reporter(reporter.clone());

    let error = CollectionError::violation("red node 3 has red child 4");
    report_error(ErrorContext::new(error, "red_black_tree").with_details("after delete"));

    let reported = reporter.reported.lock();
    assert_eq!(reported.len(), 1);
    assert!(reported[0].contains("red node 3 has red child 4"));
    assert!(reported[0].contains("red_black_tree"));
}

/// Test that the tracing error reporter accepts every error kind.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    reporter.report(ErrorContext::new(
        CollectionError::ConcurrentModification {
            expected: 1,
            found: 2,
        },
        "cursor",
    ));
    reporter.report(ErrorContext::new(MaukaError::Custom("test error".into()), "cli"));
}

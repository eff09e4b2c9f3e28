//! Error module for Mauka Collections.
//!
//! Containers report failures through [`CollectionError`]; the configuration
//! layer through [`ConfigError`]. [`MaukaError`] aggregates both for the
//! binary and for callers that drive several subsystems at once.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use thiserror::Error;

pub mod collection;
pub mod config;

pub use collection::{CollectionError, CollectionResult};
pub use config::ConfigError;

/// Result type alias used by the binary and configuration entry points.
pub type MaukaResult<T> = Result<T, MaukaError>;

/// Top-level error enum for Mauka Collections.
#[derive(Error, Debug)]
pub enum MaukaError {
    /// Errors raised by a container operation or diagnostic.
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure to render configuration as TOML.
    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: MaukaError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<E: Into<MaukaError>, S: Into<String>>(error: E, component: S) -> Self {
        Self {
            error: error.into(),
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// An error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        let programming_error = matches!(
            &context.error,
            MaukaError::Collection(e) if e.is_programming_error()
        );
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            programming_error,
            "Error reported"
        );
    }
}

static ERROR_REPORTER: OnceCell<Mutex<Option<Arc<dyn ErrorReporter>>>> = OnceCell::new();

fn reporter_slot() -> &'static Mutex<Option<Arc<dyn ErrorReporter>>> {
    ERROR_REPORTER.get_or_init(|| Mutex::new(None))
}

/// Set the process-wide error reporter.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    *reporter_slot().lock() = Some(reporter);
}

/// Report an error through the process-wide reporter.
///
/// Falls back to standard error output if no reporter has been installed.
pub fn report_error(context: ErrorContext) {
    let reporter = reporter_slot().lock().clone();
    match reporter {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}

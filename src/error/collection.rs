//! Container error module.
//!
//! This module defines the failure taxonomy shared by every container in
//! [`crate::data_structures`].

use thiserror::Error;

/// Result type for container operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Errors raised by container operations, cursors and balance diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An argument was rejected, e.g. a probe sequence that never yields a free slot.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A query or removal was invoked on a container with no elements.
    #[error("Container is empty: cannot {operation}")]
    EmptyContainer {
        /// The operation that required an element
        operation: &'static str,
    },

    /// A cursor mutation was attempted without a preceding traversal step.
    #[error("Illegal iterator state: {0}")]
    IteratorState(String),

    /// A balance diagnostic found a broken structural invariant.
    #[error("Structural violation: {0}")]
    StructuralViolation(String),

    /// The container was mutated outside of the cursor that is now being used.
    #[error("Concurrent modification detected: cursor expected version {expected}, container is at {found}")]
    ConcurrentModification {
        /// Version recorded by the cursor
        expected: u64,
        /// Version of the container at the time of the call
        found: u64,
    },
}

impl CollectionError {
    /// Shorthand for an [`CollectionError::EmptyContainer`] error.
    pub fn empty(operation: &'static str) -> Self {
        Self::EmptyContainer { operation }
    }

    /// Shorthand for an [`CollectionError::IteratorState`] error.
    pub fn iterator_state<S: Into<String>>(message: S) -> Self {
        Self::IteratorState(message.into())
    }

    /// Shorthand for a [`CollectionError::StructuralViolation`] error.
    pub fn violation<S: Into<String>>(message: S) -> Self {
        Self::StructuralViolation(message.into())
    }

    /// Returns `true` for errors that indicate a programming mistake rather
    /// than an expected precondition failure.
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Self::StructuralViolation(_) | Self::ConcurrentModification { .. }
        )
    }
}

/// Fails with [`CollectionError::ConcurrentModification`] when the stamps differ.
pub(crate) fn check_version(expected: u64, found: u64) -> CollectionResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(CollectionError::ConcurrentModification { expected, found })
    }
}

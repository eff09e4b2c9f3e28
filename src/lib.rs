//! Mauka Collections Library
//!
//! General-purpose, single-threaded in-memory containers: a cyclic deque,
//! a binary-heap priority queue, an open-addressed double-hashing table and
//! two self-balancing search trees (AVL and red-black), together with the
//! iterator adapters and diagnostics built on them.
//!
//! # Architecture
//!
//! The library is designed with the following principles in mind:
//! - Strict component boundaries: one module per container
//! - No unsafe code
//! - Fail-fast cursors instead of iterators that silently observe mutation
//! - Comprehensive error handling and propagation

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod generator;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for Mauka Collections.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter and loads the configuration
/// from the environment (prefix [`config::ENV_PREFIX`]).
pub fn init() -> error::MaukaResult<config::CollectionsConfig> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
    let config = config::ConfigLoader::default().load()?;
    Ok(config)
}

//! Test modules for Mauka Collections.
//!
//! This module contains the crate-internal test infrastructure:
//! - Property-based suites cross-checking every container against the
//!   standard library collection with the same contract
//! - Configuration loading and validation tests
//! - Error reporting tests
//! - Shared strategies and fixtures

pub mod error_tests;
pub mod open_hash_table_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    deque_op_strategy, set_op_strategy, small_values, DequeOp, MockIntComparator, SetOp,
    TestFixture,
};

//! Test utilities and fixtures for Mauka Collections.
//!
//! Operation strategies shared by the property suites, a temporary
//! directory fixture for configuration tests and a mock comparator.

use std::cmp::Ordering;
use std::path::PathBuf;

use crate::data_structures::compare::Comparator;
use mockall::mock;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use tempfile::TempDir;

/// Maximum number of operations in a generated script.
const MAX_OPS: usize = 200;

/// One step of a deque script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeOp {
    AddFirst(i32),
    AddLast(i32),
    RemoveFirst,
    RemoveLast,
    Clear,
}

/// One step of a set script, shared by the hash table and both trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    Add(i32),
    Remove(i32),
    Contains(i32),
}

/// Values drawn from a narrow range so that scripts hit duplicates.
pub fn small_values() -> BoxedStrategy<i32> {
    (-64..64).boxed()
}

/// Generate a script of deque operations, weighted towards insertion.
pub fn deque_op_strategy() -> BoxedStrategy<Vec<DequeOp>> {
    let op = prop_oneof![
        4 => small_values().prop_map(DequeOp::AddFirst),
        4 => small_values().prop_map(DequeOp::AddLast),
        3 => Just(DequeOp::RemoveFirst),
        3 => Just(DequeOp::RemoveLast),
        1 => Just(DequeOp::Clear),
    ];
    proptest::collection::vec(op, 0..MAX_OPS).boxed()
}

/// Generate a script of set operations, weighted towards insertion.
pub fn set_op_strategy() -> BoxedStrategy<Vec<SetOp>> {
    let op = prop_oneof![
        5 => small_values().prop_map(SetOp::Add),
        3 => small_values().prop_map(SetOp::Remove),
        2 => small_values().prop_map(SetOp::Contains),
    ];
    proptest::collection::vec(op, 0..MAX_OPS).boxed()
}

// Comparator over `i32` with programmable answers and call counting.
mock! {
    pub IntComparator {}

    impl Comparator<i32> for IntComparator {
        fn compare(&self, a: &i32, b: &i32) -> Ordering;
    }
}

/// Test fixture for tests that write files or set environment variables.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}

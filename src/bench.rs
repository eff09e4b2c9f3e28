//! Benchmark support for Mauka Collections.
//!
//! Shared, reproducible inputs for the criterion benchmarks so that every
//! container is measured against the same data.

use crate::generator::{DataGenerator, Student};

/// Element counts every benchmark group is run with.
pub const BENCH_SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Seed used for all benchmark inputs.
pub const BENCH_SEED: u64 = 0x6d61_756b_61;

/// Pre-generated inputs of one size.
#[derive(Debug, Clone)]
pub struct Workload {
    /// Random integers, duplicates included
    pub ints: Vec<i64>,
    /// A permutation of `0..size`
    pub keys: Vec<usize>,
    /// Students with distinct ids
    pub students: Vec<Student>,
    /// Four sorted runs totalling roughly `size` elements
    pub runs: Vec<Vec<i64>>,
}

impl Workload {
    /// Generates the inputs for `size` elements from [`BENCH_SEED`].
    pub fn new(size: usize) -> Self {
        let mut generator = DataGenerator::new(BENCH_SEED);
        let bound = i64::try_from(size).unwrap_or(i64::MAX).max(1);
        Self {
            ints: generator.random_ints(size, 0..bound).unwrap_or_default(),
            keys: generator.shuffled_range(size),
            students: generator.students(u32::try_from(size).unwrap_or(u32::MAX)),
            runs: generator.sorted_runs(4, size / 4, bound).unwrap_or_default(),
        }
    }
}

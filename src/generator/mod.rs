//! Random test-data generation.
//!
//! Every generator is driven by a seeded [`StdRng`] so that demos, property
//! tests and benchmarks can reproduce a run from its seed alone.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data_structures::open_hash_table::{double_hash, fnv_hash, sip_hash, DoubleHash};
use crate::error::{CollectionError, CollectionResult};

const SYLLABLES: [&str; 12] = [
    "ka", "le", "mo", "na", "pu", "hi", "lo", "ma", "ke", "wa", "ni", "ho",
];

/// Sample record used to exercise the hash table and the ordered containers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Grade between 0 and 100
    pub grade: u8,
}

impl Student {
    /// Creates a student record.
    pub fn new<S: Into<String>>(id: u32, name: S, grade: u8) -> Self {
        Self {
            id,
            name: name.into(),
            grade,
        }
    }
}

impl DoubleHash for Student {
    fn probe(&self, table_size: usize, probe_index: usize) -> usize {
        double_hash(fnv_hash(self), sip_hash(self), table_size, probe_index)
    }
}

/// Seeded source of random containers contents.
#[derive(Debug, Clone)]
pub struct DataGenerator {
    rng: StdRng,
    seed: u64,
}

impl DataGenerator {
    /// Creates a generator whose output is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws `count` integers uniformly from `range`; duplicates are likely.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `range` is empty.
    pub fn random_ints(&mut self, count: usize, range: Range<i64>) -> CollectionResult<Vec<i64>> {
        if range.is_empty() {
            return Err(CollectionError::InvalidArgument(format!(
                "cannot draw integers from empty range {range:?}"
            )));
        }
        Ok((0..count)
            .map(|_| self.rng.gen_range(range.clone()))
            .collect())
    }

    /// Returns `0..count` in random order.
    pub fn shuffled_range(&mut self, count: usize) -> Vec<usize> {
        let mut values: Vec<usize> = (0..count).collect();
        values.shuffle(&mut self.rng);
        values
    }

    /// Generates `count` students with distinct ids in random order.
    pub fn students(&mut self, count: u32) -> Vec<Student> {
        let mut ids: Vec<u32> = (0..count).collect();
        ids.shuffle(&mut self.rng);
        ids.into_iter()
            .map(|id| {
                let name = self.name();
                let grade = self.rng.gen_range(0..=100);
                Student::new(id, name, grade)
            })
            .collect()
    }

    /// Generates `runs` independently sorted vectors of `run_len` values
    /// below `max`, suitable as merge input.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `max` is not positive.
    pub fn sorted_runs(
        &mut self,
        runs: usize,
        run_len: usize,
        max: i64,
    ) -> CollectionResult<Vec<Vec<i64>>> {
        (0..runs)
            .map(|_| {
                let mut run = self.random_ints(run_len, 0..max)?;
                run.sort_unstable();
                Ok(run)
            })
            .collect()
    }

    fn name(&mut self) -> String {
        let syllables = self.rng.gen_range(2..=4);
        let mut name: String = (0..syllables)
            .filter_map(|_| SYLLABLES.choose(&mut self.rng).copied())
            .collect();
        if let Some(first) = name.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        name
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_output() {
        let mut a = DataGenerator::new(42);
        let mut b = DataGenerator::new(42);
        assert_eq!(a.random_ints(50, -10..10).unwrap(), b.random_ints(50, -10..10).unwrap());
        assert_eq!(a.students(20), b.students(20));
    }

    #[test]
    fn test_random_ints_within_range() {
        let mut generator = DataGenerator::new(7);
        let values = generator.random_ints(500, -3..4).unwrap();
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|v| (-3..4).contains(v)));
        assert!(matches!(
            generator.random_ints(1, 5..5),
            Err(CollectionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_shuffled_range_is_permutation() {
        let mut values = DataGenerator::new(3).shuffled_range(100);
        values.sort_unstable();
        assert_eq!(values, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_students_have_unique_ids() {
        let students = DataGenerator::new(11).students(64);
        let ids: HashSet<u32> = students.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 64);
        for student in &students {
            assert!(student.grade <= 100);
            assert!(student.name.len() >= 4);
            assert!(student.name.starts_with(|c: char| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_sorted_runs() {
        let runs = DataGenerator::new(5).sorted_runs(4, 25, 1000).unwrap();
        assert_eq!(runs.len(), 4);
        for run in runs {
            assert_eq!(run.len(), 25);
            assert!(run.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_student_probe_visits_every_slot() {
        let student = Student::new(1, "Kale", 90);
        for size in [1usize, 2, 16, 128] {
            let mut seen = vec![false; size];
            for i in 0..size {
                seen[student.probe(size, i)] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }
}

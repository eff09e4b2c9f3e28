//! Property tests for the open-addressed hash table.
//!
//! Set semantics are cross-checked against `std::collections::HashSet`; the
//! load-factor and tombstone bookkeeping is checked after every step.

use std::collections::HashSet;

use crate::data_structures::open_hash_table::{DoubleHash, Hashed, OpenHashTable, OpenHashTableConfig};
use crate::generator::DataGenerator;
use crate::tests::{set_op_strategy, small_values, SetOp};
use proptest::prelude::*;

/// Key with a linear probe sequence, so neighbouring keys collide heavily.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Linear(i32);

impl DoubleHash for Linear {
    fn probe(&self, table_size: usize, probe_index: usize) -> usize {
        (self.0.unsigned_abs() as usize % 4 + probe_index) % table_size
    }
}

fn run_script<K, F>(
    ops: Vec<SetOp>,
    config: OpenHashTableConfig,
    key: F,
) -> Result<(), TestCaseError>
where
    K: DoubleHash + Eq + std::fmt::Debug,
    F: Fn(i32) -> K,
{
    let max_load = config.max_load_factor;
    let mut table = OpenHashTable::with_config(config);
    let mut model = HashSet::new();

    for op in ops {
        match op {
            SetOp::Add(value) => {
                prop_assert_eq!(table.add(key(value))?, model.insert(value));
            }
            SetOp::Remove(value) => {
                prop_assert_eq!(table.remove(&key(value)), model.remove(&value));
            }
            SetOp::Contains(value) => {
                prop_assert_eq!(table.contains(&key(value)), model.contains(&value));
            }
        }
        prop_assert_eq!(table.len(), model.len());
        prop_assert_eq!(table.iter().count(), model.len());
        prop_assert!(table.load_factor() <= max_load + f64::EPSILON);
        prop_assert!(table.table_size().is_power_of_two());
    }
    for value in &model {
        prop_assert!(table.contains(&key(*value)));
    }
    Ok(())
}

proptest! {
    /// Double-hashed keys behave like `HashSet`
    #[test]
    fn proptest_hashed_keys_match_hash_set(
        ops in set_op_strategy(),
        initial_size in 1usize..32,
        max_load_factor in 0.5f64..=0.75,
    ) {
        let config = OpenHashTableConfig::new()
            .with_initial_size(initial_size)
            .with_max_load_factor(max_load_factor);
        run_script(ops, config, Hashed)?;
    }

    /// Heavily colliding keys still behave like `HashSet`, with eager
    /// probe validation switched on
    #[test]
    fn proptest_colliding_keys_match_hash_set(ops in set_op_strategy()) {
        let config = OpenHashTableConfig::new()
            .with_initial_size(2)
            .with_validate_probes(true);
        run_script(ops, config, Linear)?;
    }

    /// Cursor removal leaves exactly the elements that were not removed
    #[test]
    fn proptest_cursor_removal(values in prop::collection::hash_set(small_values(), 0..100)) {
        let mut table = OpenHashTable::new();
        for &value in &values {
            prop_assert!(table.add(Hashed(value))?);
        }

        let mut visited = 0;
        let mut cursor = table.cursor();
        while let Some(odd) = cursor.next(&table)?.map(|value| value.0 % 2 != 0) {
            visited += 1;
            if odd {
                cursor.remove(&mut table)?;
            }
        }

        prop_assert_eq!(visited, values.len());
        let expected: HashSet<i32> = values.iter().copied().filter(|v| v % 2 == 0).collect();
        let remaining: HashSet<i32> = table.iter().map(|value| value.0).collect();
        prop_assert_eq!(remaining, expected);
        prop_assert_eq!(table.tombstones(), values.len() - table.len());
    }
}

/// Generated students round-trip through the table and keep valid probes.
#[test]
fn test_generated_students() {
    let students = DataGenerator::new(99).students(500);
    let mut table = OpenHashTable::new();
    for student in &students {
        assert!(table.add(student.clone()).unwrap());
    }
    assert_eq!(table.len(), 500);
    assert!(table.load_factor() <= 0.5);

    for student in &students {
        assert_eq!(table.get(student), Some(student));
        OpenHashTable::validate_probe_sequence(student, table.table_size()).unwrap();
    }
    for student in students.iter().take(250) {
        assert!(table.remove(student));
    }
    assert_eq!(table.len(), 250);
    assert_eq!(table.tombstones(), 250);
}

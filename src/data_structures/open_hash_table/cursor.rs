// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Slot-order cursor for the open hash table.

use crate::data_structures::open_hash_table::table::{OpenHashTable, Slot};
use crate::error::collection::check_version;
use crate::error::{CollectionError, CollectionResult};

/// Forward cursor over the occupied slots of an [`OpenHashTable`].
///
/// Removing through the cursor tombstones the slot in place, so positions
/// of the remaining elements never move and the scan simply continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCursor {
    /// Next slot to inspect
    position: usize,

    /// Slot of the element returned by the last `next`
    last_returned: Option<usize>,

    /// Table version this cursor is synchronised with
    expected_version: u64,
}

impl TableCursor {
    pub(crate) fn new(version: u64) -> Self {
        Self {
            position: 0,
            last_returned: None,
            expected_version: version,
        }
    }

    /// Returns `true` if `next` would yield an element.
    pub fn has_next<T>(&self, table: &OpenHashTable<T>) -> bool {
        self.next_occupied(table).is_some()
    }

    /// Advances to the next occupied slot and returns its element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ConcurrentModification`] if the table was mutated
    /// outside this cursor.
    pub fn next<'a, T>(&mut self, table: &'a OpenHashTable<T>) -> CollectionResult<Option<&'a T>> {
        check_version(self.expected_version, table.version())?;
        match self.next_occupied(table) {
            Some((index, value)) => {
                self.position = index + 1;
                self.last_returned = Some(index);
                Ok(Some(value))
            }
            None => {
                self.position = table.table_size();
                self.last_returned = None;
                Ok(None)
            }
        }
    }

    /// Removes the element returned by the last `next`, leaving a tombstone.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::IteratorState`] without a preceding `next`, or
    ///   when called twice in a row.
    /// * [`CollectionError::ConcurrentModification`] on outside mutation.
    pub fn remove<T>(&mut self, table: &mut OpenHashTable<T>) -> CollectionResult<T> {
        check_version(self.expected_version, table.version())?;
        let index = self
            .last_returned
            .take()
            .ok_or_else(|| CollectionError::iterator_state("remove requires a preceding next"))?;
        let value = table.take_slot(index)?;
        self.expected_version = table.version();
        Ok(value)
    }

    fn next_occupied<'a, T>(&self, table: &'a OpenHashTable<T>) -> Option<(usize, &'a T)> {
        (self.position..table.table_size()).find_map(|index| match table.slot(index) {
            Some(Slot::Occupied(value)) => Some((index, value)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::open_hash_table::table::tests::Key;

    #[test]
    fn test_remove_all_even_keys() {
        let mut table = OpenHashTable::new();
        for id in 0..6 {
            table.add(Key(id)).unwrap();
        }
        let mut cursor = table.cursor();
        let mut visited = 0;
        while let Some(&key) = cursor.next(&table).unwrap() {
            visited += 1;
            if key.0 % 2 == 0 {
                assert_eq!(cursor.remove(&mut table), Ok(key));
            }
        }
        assert_eq!(visited, 6);
        assert_eq!(table.len(), 3);
        assert_eq!(table.tombstones(), 3);
        assert!((0..6).all(|id| table.contains(&Key(id)) == (id % 2 == 1)));
    }

    #[test]
    fn test_iterator_state_errors() {
        let mut table = OpenHashTable::new();
        table.add(Key(1)).unwrap();
        let mut cursor = table.cursor();
        assert!(matches!(cursor.remove(&mut table), Err(CollectionError::IteratorState(_))));
        assert!(cursor.has_next(&table));
        cursor.next(&table).unwrap();
        cursor.remove(&mut table).unwrap();
        assert!(matches!(cursor.remove(&mut table), Err(CollectionError::IteratorState(_))));
        assert_eq!(cursor.next(&table), Ok(None));
    }

    #[test]
    fn test_external_mutation_detected() {
        let mut table = OpenHashTable::new();
        table.add(Key(1)).unwrap();
        let mut cursor = table.cursor();
        table.add(Key(2)).unwrap();
        assert!(matches!(
            cursor.next(&table),
            Err(CollectionError::ConcurrentModification { .. })
        ));
    }
}

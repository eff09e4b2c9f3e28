// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Forward cursor for the linked deque.

use crate::data_structures::linked_deque::list::LinkedDeque;
use crate::error::collection::check_version;
use crate::error::{CollectionError, CollectionResult};

/// Front-to-back cursor over a [`LinkedDeque`] with in-place removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedDequeCursor {
    upcoming: Option<usize>,
    last_returned: Option<usize>,
    expected_version: u64,
}

impl LinkedDequeCursor {
    pub(crate) fn new(start: Option<usize>, version: u64) -> Self {
        Self {
            upcoming: start,
            last_returned: None,
            expected_version: version,
        }
    }

    /// Returns `true` if `next` would yield an element.
    pub fn has_next(&self) -> bool {
        self.upcoming.is_some()
    }

    /// Advances to the next element and returns it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ConcurrentModification`] if the deque was mutated
    /// outside this cursor.
    pub fn next<'a, T>(&mut self, deque: &'a LinkedDeque<T>) -> CollectionResult<Option<&'a T>> {
        check_version(self.expected_version, deque.version())?;
        let Some(id) = self.upcoming else {
            self.last_returned = None;
            return Ok(None);
        };
        let value = deque
            .node_value(id)
            .ok_or_else(|| CollectionError::violation(format!("cursor node {id} is out of range")))?;
        self.upcoming = deque.next_of(id);
        self.last_returned = Some(id);
        Ok(Some(value))
    }

    /// Removes the element returned by the last `next`.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::IteratorState`] without a preceding `next`, or
    ///   when called twice in a row.
    /// * [`CollectionError::ConcurrentModification`] on outside mutation.
    pub fn remove<T>(&mut self, deque: &mut LinkedDeque<T>) -> CollectionResult<T> {
        check_version(self.expected_version, deque.version())?;
        let id = self
            .last_returned
            .take()
            .ok_or_else(|| CollectionError::iterator_state("remove requires a preceding next"))?;
        if deque.node_value(id).is_none() {
            return Err(CollectionError::violation(format!("cursor node {id} is out of range")));
        }
        let (value, relocated) = deque.unlink(id);
        if let Some((from, to)) = relocated {
            if self.upcoming == Some(from) {
                self.upcoming = Some(to);
            }
        }
        self.expected_version = deque.version();
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_odd_values() {
        let mut deque: LinkedDeque<i32> = (0..10).collect();
        let mut cursor = deque.cursor();
        while let Some(&value) = cursor.next(&deque).unwrap() {
            if value % 2 == 1 {
                assert_eq!(cursor.remove(&mut deque), Ok(value));
            }
        }
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_removal_relocating_upcoming_node() {
        // Removing slot 0 moves the upcoming node out of slot 1.
        let mut deque: LinkedDeque<i32> = (0..2).collect();
        let mut cursor = deque.cursor();
        cursor.next(&deque).unwrap();
        cursor.remove(&mut deque).unwrap();
        assert_eq!(cursor.next(&deque).unwrap(), Some(&1));
        assert_eq!(cursor.next(&deque).unwrap(), None);
        assert_eq!(deque.len(), 1);
    }

    #[test]
    fn test_errors() {
        let mut deque: LinkedDeque<i32> = (0..3).collect();
        let mut cursor = deque.cursor();
        assert!(matches!(cursor.remove(&mut deque), Err(CollectionError::IteratorState(_))));
        cursor.next(&deque).unwrap();
        deque.add_last(5);
        assert!(matches!(
            cursor.remove(&mut deque),
            Err(CollectionError::ConcurrentModification { .. })
        ));
    }
}

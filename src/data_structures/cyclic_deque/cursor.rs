// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bidirectional list cursor for the cyclic deque.

use crate::data_structures::cyclic_deque::deque::CyclicDeque;
use crate::error::collection::check_version;
use crate::error::{CollectionError, CollectionResult};

/// A bidirectional cursor over a [`CyclicDeque`] that can remove, replace
/// and insert elements in place.
///
/// The cursor sits *between* elements: `next_index()` is the logical
/// position of the element `next` would return. It does not borrow the
/// deque between calls; instead every call receives the deque and verifies
/// that no mutation happened behind the cursor's back.
///
/// ```
/// use mauka_collections_lib::data_structures::CyclicDeque;
///
/// let mut deque: CyclicDeque<i32> = (1..=5).collect();
/// let mut cursor = deque.cursor();
/// while let Some(&value) = cursor.next(&deque).unwrap() {
///     if value % 2 == 0 {
///         cursor.remove(&mut deque).unwrap();
///     }
/// }
/// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DequeCursor {
    /// Logical index of the element returned by the next call to `next`
    position: usize,

    /// Logical index of the element returned by the last `next`/`previous`
    last_returned: Option<usize>,

    /// Deque version this cursor is synchronised with
    expected_version: u64,
}

impl DequeCursor {
    pub(crate) fn new(position: usize, version: u64) -> Self {
        Self {
            position,
            last_returned: None,
            expected_version: version,
        }
    }

    /// Returns `true` if `next` would yield an element.
    pub fn has_next<T>(&self, deque: &CyclicDeque<T>) -> bool {
        self.position < deque.len()
    }

    /// Returns `true` if `previous` would yield an element.
    pub fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// Logical index of the element `next` would return.
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Logical index of the element `previous` would return, if any.
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Advances over the next element and returns it, or `None` at the back.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ConcurrentModification`] if the deque was mutated
    /// outside this cursor.
    pub fn next<'a, T>(&mut self, deque: &'a CyclicDeque<T>) -> CollectionResult<Option<&'a T>> {
        check_version(self.expected_version, deque.version())?;
        if self.position >= deque.len() {
            return Ok(None);
        }
        let index = self.position;
        self.position += 1;
        self.last_returned = Some(index);
        Ok(deque.get(index))
    }

    /// Steps back over the previous element and returns it, or `None` at the front.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ConcurrentModification`] if the deque was mutated
    /// outside this cursor.
    pub fn previous<'a, T>(
        &mut self,
        deque: &'a CyclicDeque<T>,
    ) -> CollectionResult<Option<&'a T>> {
        check_version(self.expected_version, deque.version())?;
        if self.position == 0 {
            return Ok(None);
        }
        self.position -= 1;
        self.last_returned = Some(self.position);
        Ok(deque.get(self.position))
    }

    /// Removes the element last returned by `next` or `previous`.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::IteratorState`] if there is no such element
    ///   (no traversal yet, or already removed / followed by `add`).
    /// * [`CollectionError::ConcurrentModification`] on outside mutation.
    pub fn remove<T>(&mut self, deque: &mut CyclicDeque<T>) -> CollectionResult<T> {
        check_version(self.expected_version, deque.version())?;
        let index = self.last_returned.take().ok_or_else(|| {
            CollectionError::iterator_state("remove requires a preceding next or previous")
        })?;
        let value = deque.remove_at(index)?;
        self.position = index;
        self.expected_version = deque.version();
        Ok(value)
    }

    /// Replaces the element last returned by `next` or `previous`, returning
    /// the old value.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::IteratorState`] if there is no such element.
    /// * [`CollectionError::ConcurrentModification`] on outside mutation.
    pub fn set<T>(&mut self, deque: &mut CyclicDeque<T>, value: T) -> CollectionResult<T> {
        check_version(self.expected_version, deque.version())?;
        let index = self.last_returned.ok_or_else(|| {
            CollectionError::iterator_state("set requires a preceding next or previous")
        })?;
        deque.replace_at(index, value)
    }

    /// Inserts `value` immediately before the element `next` would return.
    /// A following `previous` returns the inserted value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ConcurrentModification`] on outside mutation.
    pub fn add<T>(&mut self, deque: &mut CyclicDeque<T>, value: T) -> CollectionResult<()> {
        check_version(self.expected_version, deque.version())?;
        deque.insert_at(self.position, value);
        self.position += 1;
        self.last_returned = None;
        self.expected_version = deque.version();
        Ok(())
    }
}

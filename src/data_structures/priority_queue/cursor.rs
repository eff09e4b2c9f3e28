// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Removal-capable cursor over a priority queue.

use std::collections::VecDeque;

use crate::data_structures::compare::Comparator;
use crate::data_structures::priority_queue::heap::PriorityQueue;
use crate::error::collection::check_version;
use crate::error::{CollectionError, CollectionResult};

/// What the cursor handed out last, and therefore what `remove` deletes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LastReturned<T> {
    None,
    Index(usize),
    Deferred(T),
}

/// A cursor that visits every element of a [`PriorityQueue`] exactly once,
/// in heap-array order, and can remove the element it just returned.
///
/// Removing from the middle of a heap moves the last element into the gap.
/// When that element sifts up into territory the cursor already passed, the
/// cursor keeps a copy and yields it after the array walk finishes, so it is
/// neither skipped nor seen twice.
#[derive(Debug, Clone)]
pub struct HeapCursor<T> {
    /// Next heap index to visit
    position: usize,

    /// Target of the next `remove`
    last_returned: LastReturned<T>,

    /// Elements relocated behind `position` by earlier removals
    deferred: VecDeque<T>,

    /// Queue version this cursor is synchronised with
    expected_version: u64,
}

impl<T> HeapCursor<T> {
    pub(crate) fn new(version: u64) -> Self {
        Self {
            position: 0,
            last_returned: LastReturned::None,
            deferred: VecDeque::new(),
            expected_version: version,
        }
    }

    /// Returns `true` if `next` would yield an element.
    pub fn has_next<C>(&self, queue: &PriorityQueue<T, C>) -> bool
    where
        C: Comparator<T>,
    {
        self.position < queue.len() || !self.deferred.is_empty()
    }
}

impl<T: Clone + PartialEq> HeapCursor<T> {
    /// Advances to the next element, or returns `None` when every element
    /// has been visited.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ConcurrentModification`] if the queue was mutated
    /// outside this cursor.
    pub fn next<'a, C>(&mut self, queue: &'a PriorityQueue<T, C>) -> CollectionResult<Option<&'a T>>
    where
        C: Comparator<T>,
    {
        check_version(self.expected_version, queue.version())?;

        if self.position < queue.len() {
            let index = self.position;
            self.position += 1;
            self.last_returned = LastReturned::Index(index);
            return Ok(queue.as_slice().get(index));
        }

        match self.deferred.pop_front() {
            Some(value) => {
                let index = queue.position_of(&value).ok_or_else(|| {
                    CollectionError::violation("relocated heap element is no longer present")
                })?;
                self.last_returned = LastReturned::Deferred(value);
                Ok(queue.as_slice().get(index))
            }
            None => {
                self.last_returned = LastReturned::None;
                Ok(None)
            }
        }
    }

    /// Removes the element most recently returned by `next`.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::IteratorState`] without a preceding `next`, or
    ///   when called twice in a row.
    /// * [`CollectionError::ConcurrentModification`] on outside mutation.
    pub fn remove<C>(&mut self, queue: &mut PriorityQueue<T, C>) -> CollectionResult<T>
    where
        C: Comparator<T>,
    {
        check_version(self.expected_version, queue.version())?;

        let removed = match std::mem::replace(&mut self.last_returned, LastReturned::None) {
            LastReturned::None => {
                return Err(CollectionError::iterator_state(
                    "remove requires a preceding next",
                ))
            }
            LastReturned::Index(index) => {
                let (value, moved_up) = queue.remove_at(index)?;
                match moved_up {
                    // The slot now holds an already-visited ancestor; skip it.
                    Some(moved) => {
                        if let Some(relocated) = queue.as_slice().get(moved) {
                            self.deferred.push_back(relocated.clone());
                        }
                    }
                    // The slot holds an unvisited element (or is gone); revisit it.
                    None => self.position = index,
                }
                value
            }
            LastReturned::Deferred(value) => queue.remove_eq(&value)?.ok_or_else(|| {
                CollectionError::violation("relocated heap element is no longer present")
            })?,
        };

        self.expected_version = queue.version();
        Ok(removed)
    }
}

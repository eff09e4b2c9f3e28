// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the resizable cyclic buffer deque.

use std::iter::FusedIterator;

use crate::data_structures::cyclic_deque::config::CyclicDequeConfig;
use crate::data_structures::cyclic_deque::cursor::DequeCursor;
use crate::data_structures::traits::{Clearable, Collection, Deque, Queue, Searchable};
use crate::error::{CollectionError, CollectionResult};

/// A double-ended queue stored in a fixed-length cyclic array that doubles
/// when full.
///
/// `head` is the slot of the front element and `tail` the slot of the back
/// element. Both move with wrap-around arithmetic, and `tail` always equals
/// `head + len - 1` modulo the capacity (so an empty deque has `tail` one
/// slot behind `head`).
///
/// # Type Parameters
///
/// * `T` - The element type.
#[derive(Debug, Clone)]
pub struct CyclicDeque<T> {
    /// Backing slots; exactly `len` of them, from `head` to `tail`, are `Some`
    slots: Vec<Option<T>>,

    /// Slot holding the front element
    head: usize,

    /// Slot holding the back element
    tail: usize,

    /// Number of stored elements
    len: usize,

    /// Bumped on every structural mutation, checked by cursors
    version: u64,
}

impl<T> CyclicDeque<T> {
    /// Creates an empty deque with the default initial capacity.
    pub fn new() -> Self {
        Self::with_config(CyclicDequeConfig::default())
    }

    /// Creates an empty deque with room for `capacity` elements before the
    /// first resize.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(CyclicDequeConfig::new().with_initial_capacity(capacity))
    }

    /// Creates an empty deque from the given configuration.
    pub fn with_config(config: CyclicDequeConfig) -> Self {
        let capacity = config.initial_capacity.max(1);
        Self {
            slots: empty_slots(capacity),
            head: 0,
            tail: capacity - 1,
            len: 0,
            version: 0,
        }
    }

    /// Returns the number of elements in the deque.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing array.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Inserts `value` at the front.
    pub fn add_first(&mut self, value: T) {
        self.ensure_capacity();
        self.head = self.step_back(self.head);
        self.slots[self.head] = Some(value);
        self.len += 1;
        self.version += 1;
    }

    /// Inserts `value` at the back.
    pub fn add_last(&mut self, value: T) {
        self.ensure_capacity();
        self.tail = self.step_forward(self.tail);
        self.slots[self.tail] = Some(value);
        self.len += 1;
        self.version += 1;
    }

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn get_first(&self) -> CollectionResult<&T> {
        if self.is_empty() {
            return Err(CollectionError::empty("get first element"));
        }
        self.slot(self.head)
    }

    /// Returns the back element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn get_last(&self) -> CollectionResult<&T> {
        if self.is_empty() {
            return Err(CollectionError::empty("get last element"));
        }
        self.slot(self.tail)
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn remove_first(&mut self) -> CollectionResult<T> {
        if self.is_empty() {
            return Err(CollectionError::empty("remove first element"));
        }
        let value = self.take_slot(self.head)?;
        self.head = self.step_forward(self.head);
        self.len -= 1;
        self.version += 1;
        Ok(value)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn remove_last(&mut self) -> CollectionResult<T> {
        if self.is_empty() {
            return Err(CollectionError::empty("remove last element"));
        }
        let value = self.take_slot(self.tail)?;
        self.tail = self.step_back(self.tail);
        self.len -= 1;
        self.version += 1;
        Ok(value)
    }

    /// Returns the element at logical position `index` (0 is the front).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Removes every element. The backing array keeps its capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = self.slots.len() - 1;
        self.len = 0;
        self.version += 1;
    }

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            front: 0,
            back: self.len,
        }
    }

    /// Returns a list cursor positioned before the front element.
    pub fn cursor(&self) -> DequeCursor {
        DequeCursor::new(0, self.version)
    }

    /// Returns a list cursor positioned before logical position `index`.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if `index > len`.
    pub fn cursor_at(&self, index: usize) -> CollectionResult<DequeCursor> {
        if index > self.len {
            return Err(CollectionError::InvalidArgument(format!(
                "cursor position {index} exceeds length {}",
                self.len
            )));
        }
        Ok(DequeCursor::new(index, self.version))
    }

    /// Returns a list cursor positioned after the back element, ready for
    /// backward traversal with `previous`.
    pub fn cursor_at_end(&self) -> DequeCursor {
        DequeCursor::new(self.len, self.version)
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    /// Inserts `value` so that it ends up at logical position `index`.
    pub(crate) fn insert_at(&mut self, index: usize, value: T) {
        debug_assert!(index <= self.len);
        self.ensure_capacity();
        for i in (index..self.len).rev() {
            let from = self.physical(i);
            let to = self.physical(i + 1);
            self.slots[to] = self.slots[from].take();
        }
        let at = self.physical(index);
        self.slots[at] = Some(value);
        self.tail = self.step_forward(self.tail);
        self.len += 1;
        self.version += 1;
    }

    /// Removes the element at logical position `index`, closing the gap
    /// from whichever end is nearer.
    pub(crate) fn remove_at(&mut self, index: usize) -> CollectionResult<T> {
        if index >= self.len {
            return Err(CollectionError::InvalidArgument(format!(
                "index {index} out of bounds for length {}",
                self.len
            )));
        }
        let value = self.take_slot(self.physical(index))?;
        if index < self.len / 2 {
            for i in (0..index).rev() {
                let from = self.physical(i);
                let to = self.physical(i + 1);
                self.slots[to] = self.slots[from].take();
            }
            self.head = self.step_forward(self.head);
        } else {
            for i in index..self.len - 1 {
                let from = self.physical(i + 1);
                let to = self.physical(i);
                self.slots[to] = self.slots[from].take();
            }
            self.tail = self.step_back(self.tail);
        }
        self.len -= 1;
        self.version += 1;
        Ok(value)
    }

    /// Replaces the element at logical position `index`; not a structural change.
    pub(crate) fn replace_at(&mut self, index: usize, value: T) -> CollectionResult<T> {
        if index >= self.len {
            return Err(CollectionError::InvalidArgument(format!(
                "index {index} out of bounds for length {}",
                self.len
            )));
        }
        let at = self.physical(index);
        self.slots[at]
            .replace(value)
            .ok_or_else(|| CollectionError::violation(format!("slot {at} unexpectedly empty")))
    }

    /// Doubles the backing array if every slot is occupied, re-linearising
    /// the elements so that the front lands at slot 0.
    fn ensure_capacity(&mut self) {
        if self.len < self.slots.len() {
            return;
        }
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity * 2;
        let mut slots = empty_slots(new_capacity);
        for (i, slot) in slots.iter_mut().enumerate().take(self.len) {
            let from = self.physical(i);
            *slot = self.slots[from].take();
        }
        self.slots = slots;
        self.head = 0;
        self.tail = self.len - 1;
        self.version += 1;
        tracing::debug!(old_capacity, new_capacity, len = self.len, "cyclic deque grown");
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.head + index) % self.slots.len()
    }

    #[inline]
    fn step_forward(&self, slot: usize) -> usize {
        if slot + 1 == self.slots.len() {
            0
        } else {
            slot + 1
        }
    }

    #[inline]
    fn step_back(&self, slot: usize) -> usize {
        if slot == 0 {
            self.slots.len() - 1
        } else {
            slot - 1
        }
    }

    fn slot(&self, slot: usize) -> CollectionResult<&T> {
        self.slots[slot]
            .as_ref()
            .ok_or_else(|| CollectionError::violation(format!("slot {slot} unexpectedly empty")))
    }

    fn take_slot(&mut self, slot: usize) -> CollectionResult<T> {
        self.slots[slot]
            .take()
            .ok_or_else(|| CollectionError::violation(format!("slot {slot} unexpectedly empty")))
    }
}

impl<T: PartialEq> CyclicDeque<T> {
    /// Returns `true` if an element equal to `value` is present. Linear scan.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for CyclicDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CyclicDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for CyclicDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T> Collection for CyclicDeque<T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T: PartialEq> Searchable<T> for CyclicDeque<T> {
    fn contains(&self, value: &T) -> bool {
        CyclicDeque::contains(self, value)
    }
}

impl<T> Clearable for CyclicDeque<T> {
    fn clear(&mut self) {
        CyclicDeque::clear(self)
    }
}

impl<T: PartialEq> Queue<T> for CyclicDeque<T> {
    fn add_last(&mut self, value: T) {
        CyclicDeque::add_last(self, value)
    }

    fn get_first(&self) -> CollectionResult<&T> {
        CyclicDeque::get_first(self)
    }

    fn remove_first(&mut self) -> CollectionResult<T> {
        CyclicDeque::remove_first(self)
    }
}

impl<T: PartialEq> Deque<T> for CyclicDeque<T> {
    fn add_first(&mut self, value: T) {
        CyclicDeque::add_first(self, value)
    }

    fn get_last(&self) -> CollectionResult<&T> {
        CyclicDeque::get_last(self)
    }

    fn remove_last(&mut self) -> CollectionResult<T> {
        CyclicDeque::remove_last(self)
    }
}

/// Front-to-back iterator over a [`CyclicDeque`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    deque: &'a CyclicDeque<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let item = self.deque.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.deque.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a CyclicDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

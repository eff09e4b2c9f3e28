// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Array-backed binary heap with a pluggable comparator.

use std::cmp::Ordering;
use std::fmt;

use crate::data_structures::compare::{Comparator, NaturalOrder};
use crate::data_structures::priority_queue::config::PriorityQueueConfig;
use crate::data_structures::priority_queue::cursor::HeapCursor;
use crate::data_structures::traits::{Clearable, Collection, PriorityQueueOps, Searchable};
use crate::error::{CollectionError, CollectionResult};

/// A priority queue over a complete binary tree stored in a vector.
///
/// Node `k` has children `2k + 1` and `2k + 2`. The comparator-least
/// element sits at index 0; with [`NaturalOrder`] this is a min-heap.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The comparator, fixed at construction.
#[derive(Clone)]
pub struct PriorityQueue<T, C = NaturalOrder> {
    /// Heap-ordered elements
    data: Vec<T>,

    /// Ordering used for every sift
    comparator: C,

    /// Growth and shrink policy
    config: PriorityQueueConfig,

    /// Logical capacity managed by the growth policy
    capacity: usize,

    /// Bumped on every structural mutation, checked by cursors
    version: u64,
}

impl<T: Ord> PriorityQueue<T, NaturalOrder> {
    /// Creates an empty min-heap.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty min-heap with the given configuration.
    pub fn with_config(config: PriorityQueueConfig) -> Self {
        Self::with_config_and_comparator(config, NaturalOrder)
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty heap ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_config_and_comparator(PriorityQueueConfig::default(), comparator)
    }

    /// Creates an empty heap with the given configuration and comparator.
    pub fn with_config_and_comparator(config: PriorityQueueConfig, comparator: C) -> Self {
        let capacity = config.initial_capacity.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            comparator,
            config,
            capacity,
            version: 0,
        }
    }

    /// Builds a heap from existing elements in O(n) with bottom-up heapify.
    pub fn from_vec_with_comparator(data: Vec<T>, comparator: C) -> Self {
        let config = PriorityQueueConfig::default();
        let capacity = data.len().max(config.initial_capacity);
        let mut heap = Self {
            data,
            comparator,
            config,
            capacity,
            version: 0,
        };
        heap.heapify();
        heap
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the capacity managed by the growth policy.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the comparator this heap is ordered by.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Inserts `value` in O(log n).
    pub fn add(&mut self, value: T) {
        if self.data.len() == self.capacity {
            self.grow();
        }
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        self.version += 1;
    }

    /// Removes and returns the comparator-least element in O(log n).
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the heap is empty.
    pub fn remove(&mut self) -> CollectionResult<T> {
        if self.is_empty() {
            return Err(CollectionError::empty("remove head of priority queue"));
        }
        let (value, _) = self.remove_at(0)?;
        Ok(value)
    }

    /// Returns the comparator-least element without removing it.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the heap is empty.
    pub fn element(&self) -> CollectionResult<&T> {
        self.peek()
            .ok_or_else(|| CollectionError::empty("read head of priority queue"))
    }

    /// Returns the comparator-least element, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes every element and returns to the initial capacity.
    pub fn clear(&mut self) {
        self.data.clear();
        self.data.shrink_to(self.config.initial_capacity);
        self.capacity = self.config.initial_capacity.max(1);
        self.version += 1;
    }

    /// Iterates in heap-array order, which is not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The heap array itself.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning its elements in comparator order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.remove() {
            sorted.push(value);
        }
        sorted
    }

    /// Returns a cursor positioned before the first element in heap-array order.
    pub fn cursor(&self) -> HeapCursor<T> {
        HeapCursor::new(self.version)
    }

    /// Validates the heap property at every parent/child pair.
    ///
    /// # Errors
    ///
    /// [`CollectionError::StructuralViolation`] naming the first offending pair.
    pub fn check_heap(&self) -> CollectionResult<()> {
        for child in 1..self.data.len() {
            let parent = (child - 1) / 2;
            if self.precedes(child, parent) {
                return Err(CollectionError::violation(format!(
                    "heap element at index {child} precedes its parent at index {parent}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    /// Removes the element at heap index `index` by moving the last element
    /// into its place and re-sifting.
    ///
    /// Returns the removed value and, when the relocated last element had to
    /// sift *up* past `index`, its new position. Cursors need that position
    /// because the element now sits where they have already been.
    pub(crate) fn remove_at(&mut self, index: usize) -> CollectionResult<(T, Option<usize>)> {
        let len = self.data.len();
        if index >= len {
            return Err(CollectionError::InvalidArgument(format!(
                "heap index {index} out of bounds for length {len}"
            )));
        }

        let value = self.data.swap_remove(index);
        let mut moved_up = None;
        if index < self.data.len() {
            let settled = self.sift_down(index);
            if settled == index {
                let raised = self.sift_up(index);
                if raised != index {
                    moved_up = Some(raised);
                }
            }
        }
        self.version += 1;
        self.maybe_shrink();
        Ok((value, moved_up))
    }

    fn heapify(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Moves the element at `index` toward the root; returns where it settled.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(index, parent) {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
        index
    }

    /// Moves the element at `index` toward the leaves; returns where it settled.
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.precedes(left, smallest) {
                smallest = left;
            }
            if right < len && self.precedes(right, smallest) {
                smallest = right;
            }
            if smallest == index {
                return index;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }

    #[inline]
    fn precedes(&self, a: usize, b: usize) -> bool {
        self.comparator.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity;
        self.capacity += self.config.growth_increment.max(1);
        self.data.reserve_exact(self.capacity - self.data.len());
        tracing::debug!(old_capacity, new_capacity = self.capacity, "priority queue grown");
    }

    fn maybe_shrink(&mut self) {
        let floor = self.config.initial_capacity.max(1);
        let divisor = self.config.shrink_divisor.max(2);
        if self.capacity <= floor || self.data.len() >= self.capacity / divisor {
            return;
        }
        let old_capacity = self.capacity;
        self.capacity = self
            .capacity
            .saturating_sub(self.config.growth_increment.max(1))
            .max(floor)
            .max(self.data.len());
        self.data.shrink_to(self.capacity);
        tracing::debug!(old_capacity, new_capacity = self.capacity, "priority queue shrunk");
    }
}

impl<T: PartialEq, C: Comparator<T>> PriorityQueue<T, C> {
    /// Returns `true` if an element equal to `value` is present. Linear scan.
    pub fn contains(&self, value: &T) -> bool {
        self.data.contains(value)
    }

    /// Removes the first element (in heap-array order) equal to `value`.
    pub(crate) fn remove_eq(&mut self, value: &T) -> CollectionResult<Option<T>> {
        match self.data.iter().position(|item| item == value) {
            Some(index) => Ok(Some(self.remove_at(index)?.0)),
            None => Ok(None),
        }
    }

    pub(crate) fn position_of(&self, value: &T) -> Option<usize> {
        self.data.iter().position(|item| item == value)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T: Ord> Default for PriorityQueue<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for PriorityQueue<T, NaturalOrder> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, NaturalOrder)
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T, C: Comparator<T>> Collection for PriorityQueue<T, C> {
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T: PartialEq, C: Comparator<T>> Searchable<T> for PriorityQueue<T, C> {
    fn contains(&self, value: &T) -> bool {
        PriorityQueue::contains(self, value)
    }
}

impl<T, C: Comparator<T>> Clearable for PriorityQueue<T, C> {
    fn clear(&mut self) {
        PriorityQueue::clear(self)
    }
}

impl<T: PartialEq, C: Comparator<T>> PriorityQueueOps<T> for PriorityQueue<T, C> {
    fn add(&mut self, value: T) {
        PriorityQueue::add(self, value)
    }

    fn remove(&mut self) -> CollectionResult<T> {
        PriorityQueue::remove(self)
    }

    fn element(&self) -> CollectionResult<&T> {
        PriorityQueue::element(self)
    }
}

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Doubly-linked deque over an index arena.

use std::fmt;

use crate::data_structures::linked_deque::cursor::LinkedDequeCursor;
use crate::data_structures::traits::{Clearable, Collection, Deque, Queue, Searchable};
use crate::error::{CollectionError, CollectionResult};

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A double-ended queue built from doubly-linked nodes.
///
/// Nodes are kept densely in a vector and linked by index; unlinking a
/// node moves the last node of the vector into its slot.
#[derive(Clone)]
pub struct LinkedDeque<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    version: u64,
}

impl<T> LinkedDeque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            version: 0,
        }
    }

    /// Returns the number of elements in the deque.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `value` at the front.
    pub fn add_first(&mut self, value: T) {
        let id = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.version += 1;
    }

    /// Inserts `value` at the back.
    pub fn add_last(&mut self, value: T) {
        let id = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.version += 1;
    }

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn get_first(&self) -> CollectionResult<&T> {
        self.head
            .map(|id| &self.nodes[id].value)
            .ok_or_else(|| CollectionError::empty("read first element of linked deque"))
    }

    /// Returns the back element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn get_last(&self) -> CollectionResult<&T> {
        self.tail
            .map(|id| &self.nodes[id].value)
            .ok_or_else(|| CollectionError::empty("read last element of linked deque"))
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn remove_first(&mut self) -> CollectionResult<T> {
        let head = self
            .head
            .ok_or_else(|| CollectionError::empty("remove first element of linked deque"))?;
        Ok(self.unlink(head).0)
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the deque is empty.
    pub fn remove_last(&mut self) -> CollectionResult<T> {
        let tail = self
            .tail
            .ok_or_else(|| CollectionError::empty("remove last element of linked deque"))?;
        Ok(self.unlink(tail).0)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.version += 1;
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    /// Returns a cursor positioned before the front element.
    pub fn cursor(&self) -> LinkedDequeCursor {
        LinkedDequeCursor::new(self.head, self.version)
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn node_value(&self, id: usize) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    pub(crate) fn next_of(&self, id: usize) -> Option<usize> {
        self.nodes.get(id).and_then(|node| node.next)
    }

    /// Detaches node `id` and compacts the arena.
    ///
    /// Returns the value and, when the last node was moved into the freed
    /// slot, its `(old, new)` index pair.
    pub(crate) fn unlink(&mut self, id: usize) -> (T, Option<(usize, usize)>) {
        let (prev, next) = (self.nodes[id].prev, self.nodes[id].next);
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
        self.version += 1;

        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(id);
        if id == last {
            return (removed.value, None);
        }

        let (prev, next) = (self.nodes[id].prev, self.nodes[id].next);
        match prev {
            Some(prev) => self.nodes[prev].next = Some(id),
            None => self.head = Some(id),
        }
        match next {
            Some(next) => self.nodes[next].prev = Some(id),
            None => self.tail = Some(id),
        }
        (removed.value, Some((last, id)))
    }
}

impl<T: PartialEq> LinkedDeque<T> {
    /// Returns `true` if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.nodes.iter().any(|node| node.value == *value)
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

/// Borrowing front-to-back iterator over a [`LinkedDeque`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Collection for LinkedDeque<T> {
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T: PartialEq> Searchable<T> for LinkedDeque<T> {
    fn contains(&self, value: &T) -> bool {
        LinkedDeque::contains(self, value)
    }
}

impl<T> Clearable for LinkedDeque<T> {
    fn clear(&mut self) {
        LinkedDeque::clear(self)
    }
}

impl<T: PartialEq> Queue<T> for LinkedDeque<T> {
    fn add_last(&mut self, value: T) {
        LinkedDeque::add_last(self, value)
    }

    fn get_first(&self) -> CollectionResult<&T> {
        LinkedDeque::get_first(self)
    }

    fn remove_first(&mut self) -> CollectionResult<T> {
        LinkedDeque::remove_first(self)
    }
}

impl<T: PartialEq> Deque<T> for LinkedDeque<T> {
    fn add_first(&mut self, value: T) {
        LinkedDeque::add_first(self, value)
    }

    fn get_last(&self) -> CollectionResult<&T> {
        LinkedDeque::get_last(self)
    }

    fn remove_last(&mut self) -> CollectionResult<T> {
        LinkedDeque::remove_last(self)
    }
}

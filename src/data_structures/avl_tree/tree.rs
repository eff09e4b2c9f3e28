// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Height-balanced binary search tree.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Rev;

use crate::data_structures::avl_tree::cursor::AvlCursor;
use crate::data_structures::compare::{Comparator, NaturalOrder};
use crate::data_structures::traits::{BalanceCheck, Clearable, Collection, Searchable, SortedSet};
use crate::error::{CollectionError, CollectionResult};

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
    /// Height of the subtree rooted here; a leaf has height 1
    height: usize,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 1,
        })
    }
}

/// An ordered set kept height-balanced by AVL rotations.
///
/// For every node the heights of its two subtrees differ by at most one,
/// so lookups, insertions and removals are O(log n).
#[derive(Clone)]
pub struct AvlTree<T, C = NaturalOrder> {
    root: Link<T>,
    len: usize,
    comparator: C,
    /// Bumped on every structural mutation, checked by cursors
    version: u64,
}

impl<T: Ord> AvlTree<T, NaturalOrder> {
    /// Creates an empty tree ordered by `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> AvlTree<T, C> {
    /// Creates an empty tree ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            comparator,
            version: 0,
        }
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; zero when empty.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The value at the root, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.value)
    }

    /// Inserts `value`. Returns `false` without mutating the tree if an
    /// equal element is already present.
    pub fn add(&mut self, value: T) -> bool {
        let (root, inserted) = Self::insert_node(self.root.take(), value, &self.comparator);
        self.root = Some(root);
        if inserted {
            self.len += 1;
            self.version += 1;
        }
        inserted
    }

    /// Removes the element equal to `value`; returns `false` if absent.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the element equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let (root, removed) = Self::remove_node(self.root.take(), value, &self.comparator);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
            self.version += 1;
        }
        removed
    }

    /// Returns `true` if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the stored element equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match self.comparator.compare(value, &node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Returns the least element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the tree is empty.
    pub fn first(&self) -> CollectionResult<&T> {
        let mut node = self
            .root
            .as_deref()
            .ok_or_else(|| CollectionError::empty("read first element of AVL tree"))?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the greatest element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the tree is empty.
    pub fn last(&self) -> CollectionResult<&T> {
        let mut node = self
            .root
            .as_deref()
            .ok_or_else(|| CollectionError::empty("read last element of AVL tree"))?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
        self.version += 1;
    }

    /// Iterates in ascending order. Reverse it for descending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Iterates in descending order.
    pub fn iter_desc(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    fn insert_node(link: Link<T>, value: T, comparator: &C) -> (Box<Node<T>>, bool) {
        let mut node = match link {
            None => return (Node::leaf(value), true),
            Some(node) => node,
        };
        let inserted = match comparator.compare(&value, &node.value) {
            Ordering::Less => {
                let (child, inserted) = Self::insert_node(node.left.take(), value, comparator);
                node.left = Some(child);
                inserted
            }
            Ordering::Greater => {
                let (child, inserted) = Self::insert_node(node.right.take(), value, comparator);
                node.right = Some(child);
                inserted
            }
            Ordering::Equal => false,
        };
        if inserted {
            (rebalance(node), true)
        } else {
            (node, false)
        }
    }

    fn remove_node(link: Link<T>, value: &T, comparator: &C) -> (Link<T>, Option<T>) {
        let mut node = match link {
            None => return (None, None),
            Some(node) => node,
        };
        match comparator.compare(value, &node.value) {
            Ordering::Less => {
                let (child, removed) = Self::remove_node(node.left.take(), value, comparator);
                node.left = child;
                match removed {
                    Some(_) => (Some(rebalance(node)), removed),
                    None => (Some(node), None),
                }
            }
            Ordering::Greater => {
                let (child, removed) = Self::remove_node(node.right.take(), value, comparator);
                node.right = child;
                match removed {
                    Some(_) => (Some(rebalance(node)), removed),
                    None => (Some(node), None),
                }
            }
            Ordering::Equal => {
                let Node {
                    value: removed,
                    left,
                    right,
                    ..
                } = *node;
                let replacement = match (left, right) {
                    (None, None) => None,
                    (Some(child), None) | (None, Some(child)) => Some(child),
                    (Some(left), Some(right)) => {
                        let (rest, successor) = take_min(right);
                        let mut substitute = Node::leaf(successor);
                        substitute.left = Some(left);
                        substitute.right = rest;
                        Some(rebalance(substitute))
                    }
                };
                (replacement, Some(removed))
            }
        }
    }
}

impl<T: Clone, C: Comparator<T>> AvlTree<T, C> {
    /// Returns an ascending cursor over a snapshot of the current elements.
    pub fn cursor(&self) -> AvlCursor<T> {
        AvlCursor::new(self.iter().cloned().collect(), self.version)
    }

    /// Returns a descending cursor over a snapshot of the current elements.
    pub fn cursor_desc(&self) -> AvlCursor<T> {
        AvlCursor::new(self.iter_desc().cloned().collect(), self.version)
    }
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn update_height<T>(node: &mut Node<T>) {
    node.height = 1 + height(&node.left).max(height(&node.right));
}

fn balance_factor<T>(node: &Node<T>) -> isize {
    height(&node.left) as isize - height(&node.right) as isize
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut pivot = match node.right.take() {
        Some(pivot) => pivot,
        None => return node,
    };
    node.right = pivot.left.take();
    update_height(&mut node);
    pivot.left = Some(node);
    update_height(&mut pivot);
    tracing::trace!(height = pivot.height, "AVL left rotation");
    pivot
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut pivot = match node.left.take() {
        Some(pivot) => pivot,
        None => return node,
    };
    node.left = pivot.right.take();
    update_height(&mut node);
    pivot.right = Some(node);
    update_height(&mut pivot);
    tracing::trace!(height = pivot.height, "AVL right rotation");
    pivot
}

/// Restores the height invariant at `node`, whose subtrees are balanced
/// and differ in height by at most two.
fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    update_height(&mut node);
    let balance = balance_factor(&node);

    if balance > 1 {
        if node.left.as_deref().map_or(0, balance_factor) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if node.right.as_deref().map_or(0, balance_factor) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Detaches the leftmost node of a subtree, rebalancing on the way up.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
    }
}

impl<T: fmt::Debug, C: Comparator<T>> AvlTree<T, C> {
    /// Recomputes subtree heights and compares them against the stored
    /// ones and against each other.
    fn check_subtree(link: &Link<T>) -> CollectionResult<usize> {
        let node = match link {
            None => return Ok(0),
            Some(node) => node,
        };
        let left = Self::check_subtree(&node.left)?;
        let right = Self::check_subtree(&node.right)?;
        if left.abs_diff(right) > 1 {
            return Err(CollectionError::violation(format!(
                "AVL node {:?} is unbalanced: left subtree height {left}, right subtree height {right}",
                node.value
            )));
        }
        let actual = 1 + left.max(right);
        if node.height != actual {
            return Err(CollectionError::violation(format!(
                "AVL node {:?} records height {} but its subtrees give {actual}",
                node.value, node.height
            )));
        }
        Ok(actual)
    }
}

impl<T: fmt::Debug, C: Comparator<T>> BalanceCheck for AvlTree<T, C> {
    fn check_balance(&self) -> CollectionResult<()> {
        Self::check_subtree(&self.root)?;

        let mut previous: Option<&T> = None;
        let mut count = 0;
        for value in self.iter() {
            if let Some(prev) = previous {
                if self.comparator.compare(prev, value) != Ordering::Less {
                    return Err(CollectionError::violation(format!(
                        "AVL order broken: {prev:?} is followed by {value:?}"
                    )));
                }
            }
            previous = Some(value);
            count += 1;
        }
        if count != self.len {
            return Err(CollectionError::violation(format!(
                "AVL tree reports {} elements but holds {count}",
                self.len
            )));
        }
        Ok(())
    }
}

/// Borrowing in-order iterator over an [`AvlTree`].
///
/// Keeps one explicit stack per direction; the element count stops the two
/// ends from crossing.
#[derive(Debug)]
pub struct Iter<'a, T> {
    front: Vec<&'a Node<T>>,
    back: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            front: Vec::new(),
            back: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter.push_right_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.front.push(node);
            link = node.left.as_deref();
        }
    }

    fn push_right_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.back.push(node);
            link = node.right.as_deref();
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        self.push_left_spine(node.right.as_deref());
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
        let node = self.back.pop()?;
        self.push_right_spine(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a AvlTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for AvlTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Default for AvlTree<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Comparator<T>> Extend<T> for AvlTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, C: Comparator<T>> Collection for AvlTree<T, C> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, C: Comparator<T>> Searchable<T> for AvlTree<T, C> {
    fn contains(&self, value: &T) -> bool {
        AvlTree::contains(self, value)
    }
}

impl<T, C: Comparator<T>> Clearable for AvlTree<T, C> {
    fn clear(&mut self) {
        AvlTree::clear(self)
    }
}

impl<T, C: Comparator<T>> SortedSet<T> for AvlTree<T, C> {
    fn add(&mut self, value: T) -> bool {
        AvlTree::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        AvlTree::remove(self, value)
    }

    fn first(&self) -> CollectionResult<&T> {
        AvlTree::first(self)
    }

    fn last(&self) -> CollectionResult<&T> {
        AvlTree::last(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::compare::ReverseOrder;
    use test_case::test_case;

    fn values(tree: &AvlTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test_case(&[3, 2, 1], 2 ; "left-left")]
    #[test_case(&[1, 2, 3], 2 ; "right-right")]
    #[test_case(&[3, 1, 2], 2 ; "left-right")]
    #[test_case(&[1, 3, 2], 2 ; "right-left")]
    fn test_single_and_double_rotations(order: &[i32], expected_root: i32) {
        let tree: AvlTree<i32> = order.iter().copied().collect();
        assert_eq!(tree.root(), Some(&expected_root));
        assert_eq!(tree.height(), 2);
        assert!(tree.check_balance().is_ok());
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut tree = AvlTree::new();
        assert!(tree.add(5));
        assert!(!tree.add(5));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_remove_leaf_single_child_and_two_children() {
        let mut tree: AvlTree<i32> = (1..=7).collect();
        assert!(tree.remove(&7));
        assert!(tree.remove(&6));
        assert!(tree.remove(&4));
        assert!(!tree.remove(&4));
        assert_eq!(values(&tree), vec![1, 2, 3, 5]);
        assert!(tree.check_balance().is_ok());
    }

    #[test]
    fn test_sequential_inserts_stay_logarithmic() {
        let tree: AvlTree<i32> = (0..1024).collect();
        assert!(tree.height() <= 11);
        assert!(tree.check_balance().is_ok());
        assert_eq!(tree.first(), Ok(&0));
        assert_eq!(tree.last(), Ok(&1023));
    }

    #[test]
    fn test_empty_first_last() {
        let tree: AvlTree<i32> = AvlTree::new();
        assert!(matches!(tree.first(), Err(CollectionError::EmptyContainer { .. })));
        assert!(matches!(tree.last(), Err(CollectionError::EmptyContainer { .. })));
    }

    #[test]
    fn test_double_ended_iteration() {
        let tree: AvlTree<i32> = [5, 1, 9, 3, 7].into_iter().collect();
        let mut iter = tree.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&9));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next_back(), Some(&7));
        assert_eq!(iter.next(), Some(&5));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(tree.iter_desc().copied().collect::<Vec<_>>(), vec![9, 7, 5, 3, 1]);
    }

    #[test]
    fn test_reverse_comparator() {
        let mut tree = AvlTree::with_comparator(ReverseOrder);
        tree.extend([1, 4, 2]);
        assert_eq!(tree.first(), Ok(&4));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![4, 2, 1]);
    }

    #[test]
    fn test_check_balance_reports_unbalanced_node() {
        let mut tree: AvlTree<i32> = (1..=3).collect();
        // Hang a chain off the right so the root is two levels out of balance.
        if let Some(root) = tree.root.as_mut() {
            if let Some(right) = root.right.as_mut() {
                right.right = Some(Node::leaf(4));
                if let Some(four) = right.right.as_mut() {
                    four.right = Some(Node::leaf(5));
                }
            }
        }
        tree.len = 5;
        let err = tree.check_balance().unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, CollectionError::StructuralViolation(_)));
        assert!(message.contains("AVL node"));
        assert!(message.contains("height"));
    }
}

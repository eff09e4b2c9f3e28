// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Arena-backed red-black tree with parent links.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Rev;

use crate::data_structures::compare::{Comparator, NaturalOrder};
use crate::data_structures::red_black_tree::cursor::RedBlackCursor;
use crate::data_structures::traits::{BalanceCheck, Clearable, Collection, Searchable, SortedSet};
use crate::error::{CollectionError, CollectionResult};

/// Index of a node in the arena.
pub(crate) type NodeId = usize;

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Must not have a red child
    Red,
    /// Counts toward the black height
    Black,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    value: T,
    color: Color,
    /// Navigation only; ownership flows from the arena
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// An ordered set balanced by red-black coloring.
///
/// Nodes live in a dense vector and refer to each other by index, which
/// gives every node a parent link without shared ownership. A removed
/// node's slot is filled by the last node in the vector, so the arena never
/// holds holes.
///
/// Invariants:
/// - the root is black
/// - a red node has no red child
/// - every path from a node down to an absent child crosses the same
///   number of black nodes
#[derive(Clone)]
pub struct RedBlackTree<T, C = NaturalOrder> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
    comparator: C,
    /// Bumped on every structural mutation, checked by cursors
    version: u64,
}

impl<T: Ord> RedBlackTree<T, NaturalOrder> {
    /// Creates an empty tree ordered by `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> RedBlackTree<T, C> {
    /// Creates an empty tree ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            comparator,
            version: 0,
        }
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The value at the root, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.map(|id| &self.nodes[id].value)
    }

    /// Color of the node holding a value equal to `value`.
    pub fn color_of(&self, value: &T) -> Option<Color> {
        self.find(value).map(|id| self.nodes[id].color)
    }

    /// Inserts `value`. Returns `false` without mutating the tree if an
    /// equal element is already present.
    pub fn add(&mut self, value: T) -> bool {
        let mut parent = None;
        let mut went_left = false;
        let mut current = self.root;
        while let Some(id) = current {
            parent = Some(id);
            current = match self.comparator.compare(&value, &self.nodes[id].value) {
                Ordering::Less => {
                    went_left = true;
                    self.nodes[id].left
                }
                Ordering::Greater => {
                    went_left = false;
                    self.nodes[id].right
                }
                Ordering::Equal => return false,
            };
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(id),
            Some(p) if went_left => self.nodes[p].left = Some(id),
            Some(p) => self.nodes[p].right = Some(id),
        }

        self.insert_fixup(id);
        self.version += 1;
        true
    }

    /// Removes the element equal to `value`; returns `false` if absent.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the element equal to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let id = self.find(value)?;
        Some(self.delete_node(id).0)
    }

    /// Returns `true` if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the stored element equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.find(value).map(|id| &self.nodes[id].value)
    }

    /// Returns the least element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the tree is empty.
    pub fn first(&self) -> CollectionResult<&T> {
        self.root
            .map(|root| &self.nodes[min_node(&self.nodes, root)].value)
            .ok_or_else(|| CollectionError::empty("read first element of red-black tree"))
    }

    /// Returns the greatest element.
    ///
    /// # Errors
    ///
    /// [`CollectionError::EmptyContainer`] if the tree is empty.
    pub fn last(&self) -> CollectionResult<&T> {
        self.root
            .map(|root| &self.nodes[max_node(&self.nodes, root)].value)
            .ok_or_else(|| CollectionError::empty("read last element of red-black tree"))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.version += 1;
    }

    /// Iterates in ascending order by following parent links.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.root.map(|root| min_node(&self.nodes, root)),
            back: self.root.map(|root| max_node(&self.nodes, root)),
            remaining: self.nodes.len(),
        }
    }

    /// Iterates in descending order.
    pub fn iter_desc(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Returns a live ascending cursor.
    pub fn cursor(&self) -> RedBlackCursor {
        let start = self.root.map(|root| min_node(&self.nodes, root));
        RedBlackCursor::new(start, true, self.version)
    }

    /// Returns a live descending cursor.
    pub fn cursor_desc(&self) -> RedBlackCursor {
        let start = self.root.map(|root| max_node(&self.nodes, root));
        RedBlackCursor::new(start, false, self.version)
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    pub(crate) fn successor_of(&self, id: NodeId) -> Option<NodeId> {
        successor(&self.nodes, id)
    }

    pub(crate) fn predecessor_of(&self, id: NodeId) -> Option<NodeId> {
        predecessor(&self.nodes, id)
    }

    /// Unlinks node `id`, rebalances, and compacts the arena.
    ///
    /// Returns the removed value and, when the arena's last node was moved
    /// into the freed slot, its `(old, new)` index pair.
    pub(crate) fn delete_node(&mut self, id: NodeId) -> (T, Option<(NodeId, NodeId)>) {
        let mut removed_color = self.nodes[id].color;
        let fixup_node;
        let fixup_parent;

        match (self.nodes[id].left, self.nodes[id].right) {
            (None, child) | (child, None) => {
                fixup_node = child;
                fixup_parent = self.nodes[id].parent;
                self.transplant(id, child);
            }
            (Some(left), Some(right)) => {
                let successor = min_node(&self.nodes, right);
                removed_color = self.nodes[successor].color;
                fixup_node = self.nodes[successor].right;
                if self.nodes[successor].parent == Some(id) {
                    fixup_parent = Some(successor);
                } else {
                    fixup_parent = self.nodes[successor].parent;
                    self.transplant(successor, fixup_node);
                    self.nodes[successor].right = Some(right);
                    self.nodes[right].parent = Some(successor);
                }
                self.transplant(id, Some(successor));
                self.nodes[successor].left = Some(left);
                self.nodes[left].parent = Some(successor);
                self.nodes[successor].color = self.nodes[id].color;
            }
        }

        if removed_color == Color::Black {
            self.delete_fixup(fixup_node, fixup_parent);
        }
        self.version += 1;
        self.release(id)
    }

    fn find(&self, value: &T) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            current = match self.comparator.compare(value, &self.nodes[id].value) {
                Ordering::Less => self.nodes[id].left,
                Ordering::Greater => self.nodes[id].right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.nodes[id].color == Color::Red)
    }

    fn set_color(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(id) = id {
            self.nodes[id].color = color;
        }
    }

    /// Points `parent`'s link to `old` (or the root) at `new` instead.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = new,
            Some(p) => self.nodes[p].right = new,
        }
    }

    fn transplant(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.nodes[old].parent;
        self.replace_child(parent, old, new);
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
    }

    fn rotate_left(&mut self, x: NodeId) {
        let Some(y) = self.nodes[x].right else {
            return;
        };
        let y_left = self.nodes[y].left;
        self.nodes[x].right = y_left;
        if let Some(y_left) = y_left {
            self.nodes[y_left].parent = Some(x);
        }
        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        self.replace_child(parent, x, Some(y));
        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
        tracing::trace!(pivot = y, "red-black left rotation");
    }

    fn rotate_right(&mut self, y: NodeId) {
        let Some(x) = self.nodes[y].left else {
            return;
        };
        let x_right = self.nodes[x].right;
        self.nodes[y].left = x_right;
        if let Some(x_right) = x_right {
            self.nodes[x_right].parent = Some(y);
        }
        let parent = self.nodes[y].parent;
        self.nodes[x].parent = parent;
        self.replace_child(parent, y, Some(x));
        self.nodes[x].right = Some(y);
        self.nodes[y].parent = Some(x);
        tracing::trace!(pivot = x, "red-black right rotation");
    }

    fn insert_fixup(&mut self, mut node: NodeId) {
        while let Some(parent) = self.nodes[node].parent {
            if self.nodes[parent].color == Color::Black {
                break;
            }
            // A red parent is never the root, but stay total anyway.
            let Some(grandparent) = self.nodes[parent].parent else {
                break;
            };

            if self.nodes[grandparent].left == Some(parent) {
                let uncle = self.nodes[grandparent].right;
                if self.is_red(uncle) {
                    self.nodes[parent].color = Color::Black;
                    self.set_color(uncle, Color::Black);
                    self.nodes[grandparent].color = Color::Red;
                    node = grandparent;
                } else {
                    let mut parent = parent;
                    if self.nodes[parent].right == Some(node) {
                        self.rotate_left(parent);
                        std::mem::swap(&mut node, &mut parent);
                    }
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.nodes[grandparent].left;
                if self.is_red(uncle) {
                    self.nodes[parent].color = Color::Black;
                    self.set_color(uncle, Color::Black);
                    self.nodes[grandparent].color = Color::Red;
                    node = grandparent;
                } else {
                    let mut parent = parent;
                    if self.nodes[parent].left == Some(node) {
                        self.rotate_right(parent);
                        std::mem::swap(&mut node, &mut parent);
                    }
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }
        }
        self.set_color(self.root, Color::Black);
    }

    /// Restores equal black heights after a black node left the tree.
    /// `node` carries the extra black; it may be absent, hence `parent`.
    fn delete_fixup(&mut self, mut node: Option<NodeId>, mut parent: Option<NodeId>) {
        while node != self.root && !self.is_red(node) {
            let Some(p) = parent else {
                break;
            };

            if self.nodes[p].left == node {
                let mut sibling = self.nodes[p].right;
                if self.is_red(sibling) {
                    self.set_color(sibling, Color::Black);
                    self.nodes[p].color = Color::Red;
                    self.rotate_left(p);
                    sibling = self.nodes[p].right;
                }
                let Some(s) = sibling else {
                    node = Some(p);
                    parent = self.nodes[p].parent;
                    continue;
                };
                if !self.is_red(self.nodes[s].left) && !self.is_red(self.nodes[s].right) {
                    self.nodes[s].color = Color::Red;
                    node = Some(p);
                    parent = self.nodes[p].parent;
                } else {
                    let mut s = s;
                    if !self.is_red(self.nodes[s].right) {
                        self.set_color(self.nodes[s].left, Color::Black);
                        self.nodes[s].color = Color::Red;
                        self.rotate_right(s);
                        match self.nodes[p].right {
                            Some(rotated) => s = rotated,
                            None => break,
                        }
                    }
                    self.nodes[s].color = self.nodes[p].color;
                    self.nodes[p].color = Color::Black;
                    self.set_color(self.nodes[s].right, Color::Black);
                    self.rotate_left(p);
                    node = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = self.nodes[p].left;
                if self.is_red(sibling) {
                    self.set_color(sibling, Color::Black);
                    self.nodes[p].color = Color::Red;
                    self.rotate_right(p);
                    sibling = self.nodes[p].left;
                }
                let Some(s) = sibling else {
                    node = Some(p);
                    parent = self.nodes[p].parent;
                    continue;
                };
                if !self.is_red(self.nodes[s].left) && !self.is_red(self.nodes[s].right) {
                    self.nodes[s].color = Color::Red;
                    node = Some(p);
                    parent = self.nodes[p].parent;
                } else {
                    let mut s = s;
                    if !self.is_red(self.nodes[s].left) {
                        self.set_color(self.nodes[s].right, Color::Black);
                        self.nodes[s].color = Color::Red;
                        self.rotate_left(s);
                        match self.nodes[p].left {
                            Some(rotated) => s = rotated,
                            None => break,
                        }
                    }
                    self.nodes[s].color = self.nodes[p].color;
                    self.nodes[p].color = Color::Black;
                    self.set_color(self.nodes[s].left, Color::Black);
                    self.rotate_right(p);
                    node = self.root;
                    parent = None;
                }
            }
        }
        self.set_color(node, Color::Black);
    }

    /// Frees the slot of an already unlinked node by moving the arena's
    /// last node into it.
    fn release(&mut self, id: NodeId) -> (T, Option<(NodeId, NodeId)>) {
        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(id);
        if id == last {
            return (removed.value, None);
        }

        let (parent, left, right) = {
            let moved = &self.nodes[id];
            (moved.parent, moved.left, moved.right)
        };
        self.replace_child(parent, last, Some(id));
        if let Some(left) = left {
            self.nodes[left].parent = Some(id);
        }
        if let Some(right) = right {
            self.nodes[right].parent = Some(id);
        }
        (removed.value, Some((last, id)))
    }
}

impl<T: fmt::Debug, C: Comparator<T>> RedBlackTree<T, C> {
    /// Validates colors and parent links below `id`; returns the black
    /// height counting the absent children as one.
    fn check_subtree(&self, id: Option<NodeId>) -> CollectionResult<usize> {
        let Some(id) = id else {
            return Ok(1);
        };
        let node = &self.nodes[id];

        for child in [node.left, node.right].into_iter().flatten() {
            let child_node = &self.nodes[child];
            if child_node.parent != Some(id) {
                return Err(CollectionError::violation(format!(
                    "red-black node {:?} does not link back to its parent {:?}",
                    child_node.value, node.value
                )));
            }
            if node.color == Color::Red && child_node.color == Color::Red {
                return Err(CollectionError::violation(format!(
                    "red node {:?} has red child {:?}",
                    node.value, child_node.value
                )));
            }
        }

        let left = self.check_subtree(node.left)?;
        let right = self.check_subtree(node.right)?;
        if left != right {
            return Err(CollectionError::violation(format!(
                "red-black node {:?} has black height {left} on the left and {right} on the right",
                node.value
            )));
        }
        Ok(left + usize::from(node.color == Color::Black))
    }
}

impl<T: fmt::Debug, C: Comparator<T>> BalanceCheck for RedBlackTree<T, C> {
    fn check_balance(&self) -> CollectionResult<()> {
        if let Some(root) = self.root {
            let node = &self.nodes[root];
            if node.color != Color::Black {
                return Err(CollectionError::violation(format!(
                    "red-black root {:?} is red",
                    node.value
                )));
            }
            if node.parent.is_some() {
                return Err(CollectionError::violation(format!(
                    "red-black root {:?} has a parent link",
                    node.value
                )));
            }
        }
        self.check_subtree(self.root)?;

        let mut previous: Option<&T> = None;
        let mut count = 0;
        for value in self.iter() {
            if let Some(prev) = previous {
                if self.comparator.compare(prev, value) != Ordering::Less {
                    return Err(CollectionError::violation(format!(
                        "red-black order broken: {prev:?} is followed by {value:?}"
                    )));
                }
            }
            previous = Some(value);
            count += 1;
        }
        if count != self.nodes.len() {
            return Err(CollectionError::violation(format!(
                "red-black tree holds {} nodes but only {count} are reachable",
                self.nodes.len()
            )));
        }
        Ok(())
    }
}

fn min_node<T>(nodes: &[Node<T>], mut id: NodeId) -> NodeId {
    while let Some(left) = nodes[id].left {
        id = left;
    }
    id
}

fn max_node<T>(nodes: &[Node<T>], mut id: NodeId) -> NodeId {
    while let Some(right) = nodes[id].right {
        id = right;
    }
    id
}

/// Next node in ascending order: the leftmost node of the right subtree,
/// or else the first ancestor reached from its left side.
fn successor<T>(nodes: &[Node<T>], id: NodeId) -> Option<NodeId> {
    if let Some(right) = nodes[id].right {
        return Some(min_node(nodes, right));
    }
    let mut child = id;
    let mut parent = nodes[id].parent;
    while let Some(p) = parent {
        if nodes[p].left == Some(child) {
            return Some(p);
        }
        child = p;
        parent = nodes[p].parent;
    }
    None
}

/// Mirror image of [`successor`].
fn predecessor<T>(nodes: &[Node<T>], id: NodeId) -> Option<NodeId> {
    if let Some(left) = nodes[id].left {
        return Some(max_node(nodes, left));
    }
    let mut child = id;
    let mut parent = nodes[id].parent;
    while let Some(p) = parent {
        if nodes[p].right == Some(child) {
            return Some(p);
        }
        child = p;
        parent = nodes[p].parent;
    }
    None
}

/// Borrowing in-order iterator over a [`RedBlackTree`], stepping through
/// parent links instead of keeping a stack.
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
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
        let id = self.front?;
        self.front = successor(self.nodes, id);
        self.remaining -= 1;
        Some(&self.nodes[id].value)
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
        let id = self.back?;
        self.back = predecessor(self.nodes, id);
        self.remaining -= 1;
        Some(&self.nodes[id].value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a RedBlackTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for RedBlackTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord> Default for RedBlackTree<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, C: Comparator<T>> Extend<T> for RedBlackTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, C: Comparator<T>> Collection for RedBlackTree<T, C> {
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T, C: Comparator<T>> Searchable<T> for RedBlackTree<T, C> {
    fn contains(&self, value: &T) -> bool {
        RedBlackTree::contains(self, value)
    }
}

impl<T, C: Comparator<T>> Clearable for RedBlackTree<T, C> {
    fn clear(&mut self) {
        RedBlackTree::clear(self)
    }
}

impl<T, C: Comparator<T>> SortedSet<T> for RedBlackTree<T, C> {
    fn add(&mut self, value: T) -> bool {
        RedBlackTree::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        RedBlackTree::remove(self, value)
    }

    fn first(&self) -> CollectionResult<&T> {
        RedBlackTree::first(self)
    }

    fn last(&self) -> CollectionResult<&T> {
        RedBlackTree::last(self)
    }
}

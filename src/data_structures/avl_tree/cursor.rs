// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Snapshot cursor for the AVL tree.

use crate::data_structures::avl_tree::tree::AvlTree;
use crate::data_structures::compare::Comparator;
use crate::error::collection::check_version;
use crate::error::{CollectionError, CollectionResult};

/// A cursor over the values an [`AvlTree`] held when the cursor was made.
///
/// Rotations triggered by a removal reshape the tree, so the traversal
/// order is materialised up front and removal goes through the tree's
/// ordinary remove path.
#[derive(Debug, Clone)]
pub struct AvlCursor<T> {
    /// Values still to visit, next one last
    pending: Vec<T>,

    /// Target of the next `remove`
    last_returned: Option<T>,

    /// Tree version this cursor is synchronised with
    expected_version: u64,
}

impl<T: Clone> AvlCursor<T> {
    pub(crate) fn new(mut order: Vec<T>, version: u64) -> Self {
        order.reverse();
        Self {
            pending: order,
            last_returned: None,
            expected_version: version,
        }
    }

    /// Returns `true` if `next` would yield a value.
    pub fn has_next(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of values not yet visited.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Returns the next value in traversal order.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ConcurrentModification`] if the tree was mutated
    /// outside this cursor.
    pub fn next<C: Comparator<T>>(&mut self, tree: &AvlTree<T, C>) -> CollectionResult<Option<T>> {
        check_version(self.expected_version, tree.version())?;
        let value = self.pending.pop();
        self.last_returned = value.clone();
        Ok(value)
    }

    /// Removes the value returned by the last `next` from the tree.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::IteratorState`] without a preceding `next`, or
    ///   when called twice in a row.
    /// * [`CollectionError::ConcurrentModification`] on outside mutation.
    pub fn remove<C: Comparator<T>>(&mut self, tree: &mut AvlTree<T, C>) -> CollectionResult<T> {
        check_version(self.expected_version, tree.version())?;
        let value = self
            .last_returned
            .take()
            .ok_or_else(|| CollectionError::iterator_state("remove requires a preceding next"))?;
        let removed = tree
            .take(&value)
            .ok_or_else(|| CollectionError::violation("snapshot value missing from AVL tree"))?;
        self.expected_version = tree.version();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::traits::BalanceCheck;

    #[test]
    fn test_remove_every_other_ascending() {
        let mut tree: AvlTree<i32> = (0..100).collect();
        let mut cursor = tree.cursor();
        let mut keep = true;
        while let Some(value) = cursor.next(&tree).unwrap() {
            if !keep {
                assert_eq!(cursor.remove(&mut tree), Ok(value));
                tree.check_balance().unwrap();
            }
            keep = !keep;
        }
        assert_eq!(tree.len(), 50);
        assert!(tree.iter().all(|value| value % 2 == 0));
    }

    #[test]
    fn test_descending_order() {
        let tree: AvlTree<i32> = [4, 8, 1, 6].into_iter().collect();
        let mut cursor = tree.cursor_desc();
        let mut seen = Vec::new();
        while let Some(value) = cursor.next(&tree).unwrap() {
            seen.push(value);
        }
        assert_eq!(seen, vec![8, 6, 4, 1]);
    }

    #[test]
    fn test_iterator_state_and_concurrent_modification() {
        let mut tree: AvlTree<i32> = (0..3).collect();
        let mut cursor = tree.cursor();
        assert!(matches!(cursor.remove(&mut tree), Err(CollectionError::IteratorState(_))));
        cursor.next(&tree).unwrap();
        cursor.remove(&mut tree).unwrap();
        assert!(matches!(cursor.remove(&mut tree), Err(CollectionError::IteratorState(_))));

        tree.add(10);
        assert!(matches!(
            cursor.next(&tree),
            Err(CollectionError::ConcurrentModification { .. })
        ));
    }
}

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Live cursor for the red-black tree.

use crate::data_structures::compare::Comparator;
use crate::data_structures::red_black_tree::tree::{NodeId, RedBlackTree};
use crate::error::collection::check_version;
use crate::error::{CollectionError, CollectionResult};

/// A cursor that walks a [`RedBlackTree`] in place through parent links.
///
/// The follow-up node is resolved before the current one is handed out, so
/// removing the current node through the cursor cannot derail the walk:
/// deletion only relinks nodes and may move one node to a new arena index,
/// which the cursor tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedBlackCursor {
    /// Node `next` returns
    upcoming: Option<NodeId>,

    /// Node returned by the last `next`
    last_returned: Option<NodeId>,

    /// Ascending when `true`
    ascending: bool,

    /// Tree version this cursor is synchronised with
    expected_version: u64,
}

impl RedBlackCursor {
    pub(crate) fn new(start: Option<NodeId>, ascending: bool, version: u64) -> Self {
        Self {
            upcoming: start,
            last_returned: None,
            ascending,
            expected_version: version,
        }
    }

    /// Returns `true` if `next` would yield an element.
    pub fn has_next(&self) -> bool {
        self.upcoming.is_some()
    }

    /// Returns `true` for an ascending cursor.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Steps to the next node in cursor order and returns its value.
    ///
    /// # Errors
    ///
    /// [`CollectionError::ConcurrentModification`] if the tree was mutated
    /// outside this cursor.
    pub fn next<'a, T, C>(&mut self, tree: &'a RedBlackTree<T, C>) -> CollectionResult<Option<&'a T>>
    where
        C: Comparator<T>,
    {
        check_version(self.expected_version, tree.version())?;
        let Some(id) = self.upcoming else {
            self.last_returned = None;
            return Ok(None);
        };
        let value = tree
            .value(id)
            .ok_or_else(|| CollectionError::violation(format!("cursor node {id} is out of range")))?;
        self.upcoming = if self.ascending {
            tree.successor_of(id)
        } else {
            tree.predecessor_of(id)
        };
        self.last_returned = Some(id);
        Ok(Some(value))
    }

    /// Deletes the node returned by the last `next` from the tree.
    ///
    /// # Errors
    ///
    /// * [`CollectionError::IteratorState`] without a preceding `next`, or
    ///   when called twice in a row.
    /// * [`CollectionError::ConcurrentModification`] on outside mutation.
    pub fn remove<T, C>(&mut self, tree: &mut RedBlackTree<T, C>) -> CollectionResult<T>
    where
        C: Comparator<T>,
    {
        check_version(self.expected_version, tree.version())?;
        let id = self
            .last_returned
            .take()
            .ok_or_else(|| CollectionError::iterator_state("remove requires a preceding next"))?;
        if tree.value(id).is_none() {
            return Err(CollectionError::violation(format!("cursor node {id} is out of range")));
        }

        let (value, relocated) = tree.delete_node(id);
        if let Some((from, to)) = relocated {
            if self.upcoming == Some(from) {
                self.upcoming = Some(to);
            }
        }
        self.expected_version = tree.version();
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::traits::BalanceCheck;

    #[test]
    fn test_ascending_removal_visits_every_value_once() {
        let mut tree: RedBlackTree<i32> = (0..64).map(|v| (v * 29) % 64).collect();
        let mut cursor = tree.cursor();
        let mut seen = Vec::new();
        while let Some(&value) = cursor.next(&tree).unwrap() {
            seen.push(value);
            if value % 3 != 0 {
                assert_eq!(cursor.remove(&mut tree), Ok(value));
                tree.check_balance().unwrap();
            }
        }
        assert_eq!(seen, (0..64).collect::<Vec<_>>());
        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            (0..64).filter(|v| v % 3 == 0).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_descending_removal() {
        let mut tree: RedBlackTree<i32> = (1..=20).collect();
        let mut cursor = tree.cursor_desc();
        let mut seen = Vec::new();
        while let Some(&value) = cursor.next(&tree).unwrap() {
            seen.push(value);
            if value > 10 {
                cursor.remove(&mut tree).unwrap();
            }
        }
        assert_eq!(seen, (1..=20).rev().collect::<Vec<_>>());
        assert_eq!(tree.len(), 10);
        assert_eq!(tree.last(), Ok(&10));
        assert!(tree.check_balance().is_ok());
    }

    #[test]
    fn test_upcoming_node_relocated_from_last_slot() {
        // 10 and 20 land in slots 0 and 2; deleting 10 moves 20 into slot 0
        let mut tree = RedBlackTree::new();
        for value in [10, 30, 20] {
            tree.add(value);
        }
        let mut cursor = tree.cursor();
        assert_eq!(cursor.next(&tree), Ok(Some(&10)));
        assert_eq!(cursor.upcoming, Some(2));

        assert_eq!(cursor.remove(&mut tree), Ok(10));
        assert_eq!(cursor.upcoming, Some(0));
        assert_eq!(cursor.next(&tree), Ok(Some(&20)));
        assert_eq!(cursor.next(&tree), Ok(Some(&30)));
        assert_eq!(cursor.next(&tree), Ok(None));
        assert!(tree.check_balance().is_ok());
    }

    #[test]
    fn test_descending_upcoming_node_relocated_from_last_slot() {
        let mut tree = RedBlackTree::new();
        for value in [30, 10, 20] {
            tree.add(value);
        }
        let mut cursor = tree.cursor_desc();
        assert_eq!(cursor.next(&tree), Ok(Some(&30)));
        assert_eq!(cursor.upcoming, Some(2));

        assert_eq!(cursor.remove(&mut tree), Ok(30));
        assert_eq!(cursor.upcoming, Some(0));
        assert_eq!(cursor.next(&tree), Ok(Some(&20)));
        assert_eq!(cursor.remove(&mut tree), Ok(20));
        assert_eq!(cursor.next(&tree), Ok(Some(&10)));
        assert_eq!(cursor.next(&tree), Ok(None));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10]);
        assert!(tree.check_balance().is_ok());
    }

    #[test]
    fn test_remove_everything() {
        let mut tree: RedBlackTree<i32> = (0..33).collect();
        let mut cursor = tree.cursor();
        while cursor.next(&tree).unwrap().is_some() {
            cursor.remove(&mut tree).unwrap();
        }
        assert!(tree.is_empty());
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_iterator_state_and_concurrent_modification() {
        let mut tree: RedBlackTree<i32> = (0..5).collect();
        let mut cursor = tree.cursor();
        assert!(matches!(cursor.remove(&mut tree), Err(CollectionError::IteratorState(_))));
        cursor.next(&tree).unwrap();
        cursor.remove(&mut tree).unwrap();
        assert!(matches!(cursor.remove(&mut tree), Err(CollectionError::IteratorState(_))));

        tree.remove(&4);
        assert!(matches!(
            cursor.next(&tree),
            Err(CollectionError::ConcurrentModification { .. })
        ));
    }
}

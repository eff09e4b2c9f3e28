//! Data structures for Mauka Collections.
//!
//! This module contains the in-memory containers of the crate. All of them
//! are single-threaded, own their storage exclusively, and share the small
//! contracts in [`traits`] plus the [`Comparator`] abstraction used by the
//! ordered ones:
//! - No unsafe code
//! - Mutation during traversal goes through version-checked cursors
//! - Balance and heap diagnostics for testing

pub mod avl_tree;
pub mod compare;
pub mod cyclic_deque;
pub mod linked_deque;
pub mod merging;
pub mod open_hash_table;
pub mod priority_queue;
pub mod red_black_tree;
pub mod traits;

// Re-export common data structures
pub use avl_tree::{AvlCursor, AvlTree};
pub use compare::{Comparator, NaturalOrder, ReverseOrder};
pub use cyclic_deque::{CyclicDeque, CyclicDequeConfig, DequeCursor};
pub use linked_deque::{LinkedDeque, LinkedDequeCursor};
pub use merging::{merge_sorted, MergingIterator, PeekingIterator};
pub use open_hash_table::{DoubleHash, Hashed, OpenHashTable, OpenHashTableConfig, TableCursor};
pub use priority_queue::{HeapCursor, PriorityQueue, PriorityQueueConfig};
pub use red_black_tree::{Color, RedBlackCursor, RedBlackTree};
pub use traits::{
    BalanceCheck, Clearable, Collection, Deque, PriorityQueueOps, Queue, Searchable, SortedSet,
};

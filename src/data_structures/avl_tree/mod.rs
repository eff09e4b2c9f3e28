// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! AVL tree.
//!
//! A self-balancing binary search tree that stores a height in every node
//! and restores the |height(left) - height(right)| <= 1 invariant with
//! single or double rotations after each insertion and removal.
//!
//! # Example
//!
//! ```
//! use mauka_collections_lib::data_structures::avl_tree::AvlTree;
//! use mauka_collections_lib::data_structures::BalanceCheck;
//!
//! let mut tree = AvlTree::new();
//! for value in [1, 2, 3] {
//!     tree.add(value);
//! }
//! assert_eq!(tree.root(), Some(&2));
//! assert!(tree.check_balance().is_ok());
//! assert_eq!(tree.iter_desc().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

mod cursor;
mod tree;

pub use cursor::AvlCursor;
pub use tree::{AvlTree, Iter};

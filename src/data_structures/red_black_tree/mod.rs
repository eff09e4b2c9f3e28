// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Red-black tree.
//!
//! A self-balancing binary search tree that keeps a color on each node and
//! restores the red-black invariants with recoloring and rotations after
//! each insertion and removal. Nodes are stored in an index arena with
//! parent links, which drives both the borrowing iterator and the live
//! [`RedBlackCursor`].
//!
//! # Example
//!
//! ```
//! use mauka_collections_lib::data_structures::red_black_tree::{Color, RedBlackTree};
//! use mauka_collections_lib::data_structures::BalanceCheck;
//!
//! let mut tree: RedBlackTree<i32> = [10, 20, 30, 15, 25, 5].into_iter().collect();
//! assert!(tree.remove(&10));
//! assert!(tree.check_balance().is_ok());
//! assert_eq!(tree.root().and_then(|root| tree.color_of(root)), Some(Color::Black));
//! ```

mod cursor;
mod tree;

pub use cursor::RedBlackCursor;
pub use tree::{Color, Iter, RedBlackTree};

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Binary-heap priority queue.
//!
//! An array-backed complete binary tree ordered by a [`Comparator`] chosen
//! at construction time. The head is always the comparator-least element.
//!
//! # Features
//!
//! - O(log n) `add` / `remove`, O(1) `element` / `peek`
//! - O(n) construction from an existing vector
//! - Incremental growth with hysteresis-controlled shrinking
//! - [`HeapCursor`] that removes elements mid-traversal without losing any
//!
//! # Example
//!
//! ```
//! use mauka_collections_lib::data_structures::priority_queue::PriorityQueue;
//! use mauka_collections_lib::data_structures::ReverseOrder;
//!
//! let mut tasks = PriorityQueue::with_comparator(ReverseOrder);
//! tasks.add(2);
//! tasks.add(9);
//! tasks.add(4);
//!
//! assert_eq!(tasks.remove().unwrap(), 9);
//! assert_eq!(tasks.element().unwrap(), &4);
//! ```
//!
//! [`Comparator`]: crate::data_structures::Comparator

mod config;
mod cursor;
mod heap;

pub use config::PriorityQueueConfig;
pub use cursor::HeapCursor;
pub use heap::PriorityQueue;

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lookahead and k-way merge iterators.
//!
//! ```
//! use mauka_collections_lib::data_structures::merging::{merge_sorted, PeekingIterator};
//!
//! let merged = merge_sorted(vec![vec![1, 5], vec![2, 3], vec![4]]);
//! let mut iter = PeekingIterator::new(merged.into_iter());
//! assert_eq!(iter.peek(), Some(&1));
//! assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! ```

mod merge;
mod peeking;

pub use merge::{merge_sorted, MergingIterator};
pub use peeking::PeekingIterator;

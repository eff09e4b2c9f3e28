// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Resizable cyclic buffer deque.
//!
//! A double-ended queue backed by a fixed-length array whose front and back
//! cursors wrap around modulo the capacity. Insertions at either end are
//! amortized O(1); when every slot is occupied the array doubles and the
//! elements are re-linearised starting at slot 0.
//!
//! # Features
//!
//! - O(1) amortized `add_first` / `add_last`, O(1) removals and peeks
//! - Double-ended, exact-size borrowing iterator
//! - [`DequeCursor`] for bidirectional traversal with in-place `remove`,
//!   `set` and `add`, detecting mutation performed outside the cursor
//!
//! # Example
//!
//! ```
//! use mauka_collections_lib::data_structures::cyclic_deque::{CyclicDeque, CyclicDequeConfig};
//!
//! let config = CyclicDequeConfig::new().with_initial_capacity(2);
//! let mut deque = CyclicDeque::with_config(config);
//! deque.add_last(2);
//! deque.add_first(1);
//! deque.add_last(3);
//!
//! assert_eq!(deque.capacity(), 4);
//! assert_eq!(deque.remove_first().unwrap(), 1);
//! assert_eq!(deque.get_last().unwrap(), &3);
//! ```

mod config;
mod cursor;
mod deque;

pub use config::CyclicDequeConfig;
pub use cursor::DequeCursor;
pub use deque::{CyclicDeque, Iter};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_large_growth_preserves_elements() {
        let mut deque = CyclicDeque::new();
        for i in 0..100_000 {
            if i % 2 == 0 {
                deque.add_last(i);
            } else {
                deque.add_first(i);
            }
        }
        assert_eq!(deque.len(), 100_000);
        assert!(deque.contains(&99_999));
        assert!(deque.contains(&0));

        let mut reference = VecDeque::new();
        for i in 0..100_000 {
            if i % 2 == 0 {
                reference.push_back(i);
            } else {
                reference.push_front(i);
            }
        }
        assert!(deque.iter().eq(reference.iter()));
    }

    #[test]
    fn test_custom_configuration() {
        let config = CyclicDequeConfig::new().with_initial_capacity(0);
        let mut deque = CyclicDeque::with_config(config);
        assert_eq!(deque.capacity(), 1);
        deque.add_first("a");
        deque.add_first("b");
        assert_eq!(deque.capacity(), 2);
        assert_eq!(deque.get_first(), Ok(&"b"));
    }
}

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Open-addressed hash set with double hashing.
//!
//! Elements are stored directly in a power-of-two array of slots. Each
//! element supplies its probe sequence through [`DoubleHash`]; collisions
//! are resolved by walking that sequence. Deletion leaves tombstones that
//! are purged the next time the table is rebuilt.
//!
//! # Features
//!
//! - O(1) average `add` / `remove` / `contains`
//! - Tombstone reuse on insertion, purge-or-double rebuilds
//! - Lazy detection of malformed probe sequences, with optional eager
//!   validation ([`OpenHashTableConfig::with_validate_probes`])
//! - [`TableCursor`] with in-place removal
//!
//! # Example
//!
//! ```
//! use mauka_collections_lib::data_structures::open_hash_table::{Hashed, OpenHashTable};
//!
//! let mut table = OpenHashTable::new();
//! assert!(table.add(Hashed("kea")).unwrap());
//! assert!(!table.add(Hashed("kea")).unwrap());
//! assert!(table.contains(&Hashed("kea")));
//! assert!(table.remove(&Hashed("kea")));
//! assert_eq!(table.tombstones(), 1);
//! ```

mod config;
mod cursor;
mod probe;
mod table;

pub use config::{OpenHashTableConfig, MAX_INITIAL_SIZE, MAX_LOAD_FACTOR, MIN_LOAD_FACTOR};
pub use cursor::TableCursor;
pub use probe::{double_hash, fnv_hash, sip_hash, DoubleHash, Hashed};
pub use table::{Iter, OpenHashTable};

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Double-hashing probe sequences.
//!
//! Elements stored in an [`super::OpenHashTable`] supply their own probe
//! sequence. The helpers here build one from two independent hashes:
//! FNV-1a for the start slot and SipHash (the std `DefaultHasher`) for the
//! stride.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// A value that knows where it may live in an open-addressed table.
///
/// For every `table_size`, `probe(table_size, i)` for `i` in
/// `0..table_size` must visit each slot index in `0..table_size` exactly
/// once. The table does not verify this unless asked to (see
/// [`super::OpenHashTableConfig::validate_probes`]); a malformed sequence
/// surfaces as [`crate::error::CollectionError::InvalidArgument`] once an
/// insertion exhausts it.
pub trait DoubleHash {
    /// Returns the slot to try on attempt `probe_index`.
    fn probe(&self, table_size: usize, probe_index: usize) -> usize;
}

/// Combines two hash components into `(h1 + i * h2) mod table_size`.
///
/// The stride is forced odd, so for power-of-two table sizes the sequence
/// is always a full permutation.
#[inline]
pub fn double_hash(h1: u64, h2: u64, table_size: usize, probe_index: usize) -> usize {
    if table_size == 0 {
        return 0;
    }
    let size = table_size as u128;
    let stride = (h2 | 1) as u128;
    ((h1 as u128 + probe_index as u128 * stride) % size) as usize
}

/// First hash component: FNV-1a.
pub fn fnv_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = fnv::FnvHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Second hash component: SipHash via the standard library.
pub fn sip_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Wraps any hashable value so it can be stored in an open hash table.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hashed<T>(pub T);

impl<T> Hashed<T> {
    /// Unwraps the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Hash> DoubleHash for Hashed<T> {
    fn probe(&self, table_size: usize, probe_index: usize) -> usize {
        double_hash(fnv_hash(&self.0), sip_hash(&self.0), table_size, probe_index)
    }
}

impl<T> Deref for Hashed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Hashed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> From<T> for Hashed<T> {
    fn from(value: T) -> Self {
        Hashed(value)
    }
}

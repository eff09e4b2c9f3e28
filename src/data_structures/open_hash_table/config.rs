// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the open-addressed hash table.

use serde::{Deserialize, Serialize};

/// Lowest accepted maximum load factor.
pub const MIN_LOAD_FACTOR: f64 = 0.5;

/// Highest accepted maximum load factor.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Largest initial table size; larger requests are clamped to it.
pub const MAX_INITIAL_SIZE: usize = 1 << 30;

/// Rounds a requested size up to a power of two within `1..=MAX_INITIAL_SIZE`.
fn round_size(requested: usize) -> usize {
    requested
        .max(1)
        .checked_next_power_of_two()
        .map_or(MAX_INITIAL_SIZE, |size| size.min(MAX_INITIAL_SIZE))
}

/// Configuration for [`super::OpenHashTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenHashTableConfig {
    /// Number of slots allocated up front, rounded up to a power of two
    pub initial_size: usize,

    /// Occupied-plus-tombstoned fraction that triggers a rebuild
    pub max_load_factor: f64,

    /// Check every probe sequence for full coverage whenever the table
    /// size changes and before each insertion
    pub validate_probes: bool,
}

impl OpenHashTableConfig {
    /// Creates a new configuration with default values.
    ///
    /// Default values:
    /// - initial_size: 16
    /// - max_load_factor: 0.5
    /// - validate_probes: false
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial table size, rounded up to the next power of two
    /// and clamped to [`MAX_INITIAL_SIZE`].
    pub fn with_initial_size(mut self, initial_size: usize) -> Self {
        self.initial_size = round_size(initial_size);
        self
    }

    /// Sets the maximum load factor, clamped to `[0.5, 0.75]`.
    pub fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = if max_load_factor.is_nan() {
            MIN_LOAD_FACTOR
        } else {
            max_load_factor.clamp(MIN_LOAD_FACTOR, MAX_LOAD_FACTOR)
        };
        self
    }

    /// Enables or disables eager probe-sequence validation.
    pub fn with_validate_probes(mut self, validate_probes: bool) -> Self {
        self.validate_probes = validate_probes;
        self
    }

    /// Table size actually used for `initial_size`.
    pub(crate) fn effective_size(&self) -> usize {
        round_size(self.initial_size)
    }

    /// Load factor actually used for `max_load_factor`.
    pub(crate) fn effective_load_factor(&self) -> f64 {
        if self.max_load_factor.is_nan() {
            MIN_LOAD_FACTOR
        } else {
            self.max_load_factor.clamp(MIN_LOAD_FACTOR, MAX_LOAD_FACTOR)
        }
    }
}

impl Default for OpenHashTableConfig {
    fn default() -> Self {
        Self {
            initial_size: 16,
            max_load_factor: MIN_LOAD_FACTOR,
            validate_probes: false,
        }
    }
}

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the binary-heap priority queue.

use serde::{Deserialize, Serialize};

/// Configuration for [`super::PriorityQueue`].
///
/// The heap grows by `growth_increment` slots when full. It gives the same
/// increment back once occupancy drops below `capacity / shrink_divisor`,
/// never going under `initial_capacity`; the gap between the two thresholds
/// keeps add/remove sequences at a boundary from reallocating every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityQueueConfig {
    /// Capacity reserved at construction and the floor for shrinking.
    pub initial_capacity: usize,

    /// Slots added on growth and released on shrink.
    pub growth_increment: usize,

    /// Shrink once `len < capacity / shrink_divisor`.
    pub shrink_divisor: usize,
}

impl PriorityQueueConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial capacity. Zero is raised to one.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity.max(1);
        self
    }

    /// Sets the growth/shrink increment. Zero is raised to one.
    pub fn with_growth_increment(mut self, growth_increment: usize) -> Self {
        self.growth_increment = growth_increment.max(1);
        self
    }

    /// Sets the shrink divisor (2 to 16).
    pub fn with_shrink_divisor(mut self, shrink_divisor: usize) -> Self {
        self.shrink_divisor = shrink_divisor.clamp(2, 16);
        self
    }
}

impl Default for PriorityQueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 11,
            growth_increment: 16,
            shrink_divisor: 4,
        }
    }
}

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the cyclic deque.

use serde::{Deserialize, Serialize};

/// Configuration for [`super::CyclicDeque`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CyclicDequeConfig {
    /// Number of slots allocated up front.
    /// The backing array doubles whenever an insert finds it full.
    pub initial_capacity: usize,
}

impl CyclicDequeConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial number of slots. Zero is raised to one.
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity.max(1);
        self
    }
}

impl Default for CyclicDequeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 10,
        }
    }
}

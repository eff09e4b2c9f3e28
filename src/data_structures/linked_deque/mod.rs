// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Doubly-linked deque.

mod cursor;
mod list;

pub use cursor::LinkedDequeCursor;
pub use list::{Iter, LinkedDeque};

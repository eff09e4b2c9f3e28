// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! One-element lookahead over any iterator.

/// Wraps an iterator so its next element can be inspected without being
/// consumed.
#[derive(Debug, Clone)]
pub struct PeekingIterator<I: Iterator> {
    inner: I,
    /// `Some(None)` once the inner iterator reported exhaustion
    peeked: Option<Option<I::Item>>,
}

impl<I: Iterator> PeekingIterator<I> {
    /// Wraps `inner`.
    pub fn new(inner: I) -> Self {
        Self { inner, peeked: None }
    }

    /// Returns the element `next` would return, without consuming it.
    pub fn peek(&mut self) -> Option<&I::Item> {
        let inner = &mut self.inner;
        self.peeked.get_or_insert_with(|| inner.next()).as_ref()
    }

    /// Consumes and returns the next element only if it satisfies `predicate`.
    pub fn next_if(&mut self, predicate: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        match self.peek() {
            Some(item) if predicate(item) => self.next(),
            _ => None,
        }
    }
}

impl<I: Iterator> Iterator for PeekingIterator<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = match &self.peeked {
            Some(None) => return (0, Some(0)),
            Some(Some(_)) => 1,
            None => 0,
        };
        let (low, high) = self.inner.size_hint();
        (
            low.saturating_add(extra),
            high.and_then(|high| high.checked_add(extra)),
        )
    }
}

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! K-way merge of sorted sources.

use std::cmp::Ordering;
use std::fmt;

use crate::data_structures::compare::{Comparator, NaturalOrder};
use crate::data_structures::priority_queue::PriorityQueue;

/// Current front element of one source.
#[derive(Debug, Clone)]
struct Head<T> {
    value: T,
    source: usize,
}

/// Orders heads by value, then by source position so equal values come
/// out in source order.
#[derive(Debug, Clone)]
struct HeadOrder<C>(C);

impl<T, C: Comparator<T>> Comparator<Head<T>> for HeadOrder<C> {
    fn compare(&self, a: &Head<T>, b: &Head<T>) -> Ordering {
        self.0
            .compare(&a.value, &b.value)
            .then_with(|| a.source.cmp(&b.source))
    }
}

/// Merges any number of individually sorted iterators into one sorted
/// stream, holding one pending element per source in a [`PriorityQueue`].
///
/// Output is sorted only if every source is sorted under the same
/// comparator.
pub struct MergingIterator<I: Iterator, C = NaturalOrder> {
    sources: Vec<I>,
    heads: PriorityQueue<Head<I::Item>, HeadOrder<C>>,
}

impl<I> MergingIterator<I, NaturalOrder>
where
    I: Iterator,
    I::Item: Ord,
{
    /// Merges `sources` in ascending `Ord` order.
    pub fn new<S>(sources: S) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I>,
    {
        Self::with_comparator(sources, NaturalOrder)
    }
}

impl<I: Iterator, C: Comparator<I::Item>> MergingIterator<I, C> {
    /// Merges `sources`, each sorted by `comparator`.
    pub fn with_comparator<S>(sources: S, comparator: C) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I>,
    {
        let mut sources: Vec<I> = sources.into_iter().map(IntoIterator::into_iter).collect();
        let mut heads = PriorityQueue::with_comparator(HeadOrder(comparator));
        for (source, iter) in sources.iter_mut().enumerate() {
            if let Some(value) = iter.next() {
                heads.add(Head { value, source });
            }
        }
        Self { sources, heads }
    }

    /// Number of sources that still have elements pending.
    pub fn active_sources(&self) -> usize {
        self.heads.len()
    }

    /// Returns the element `next` would return, without consuming it.
    pub fn peek(&self) -> Option<&I::Item> {
        self.heads.peek().map(|head| &head.value)
    }
}

impl<I: Iterator, C: Comparator<I::Item>> Iterator for MergingIterator<I, C> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let Head { value, source } = self.heads.remove().ok()?;
        if let Some(refill) = self.sources.get_mut(source).and_then(|iter| iter.next()) {
            self.heads.add(Head {
                value: refill,
                source,
            });
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sources
            .iter()
            .map(Iterator::size_hint)
            .fold((self.heads.len(), Some(self.heads.len())), |(low, high), (l, h)| {
                (
                    low.saturating_add(l),
                    high.zip(h).and_then(|(a, b)| a.checked_add(b)),
                )
            })
    }
}

impl<I: Iterator, C: Comparator<I::Item>> fmt::Debug for MergingIterator<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MergingIterator")
            .field("sources", &self.sources.len())
            .field("pending", &self.heads.len())
            .finish()
    }
}

/// Merges sorted sources into a single sorted vector.
pub fn merge_sorted<S, T>(sources: S) -> Vec<T>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: Ord,
{
    MergingIterator::new(sources).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::compare::ReverseOrder;

    #[test]
    fn test_merges_sorted_runs() {
        let merged = merge_sorted(vec![vec![1, 4, 9], vec![2, 3, 10], vec![], vec![0, 5]]);
        assert_eq!(merged, vec![0, 1, 2, 3, 4, 5, 9, 10]);
    }

    #[test]
    fn test_ties_follow_source_order() {
        let sources = vec![
            vec![(1, 'a'), (3, 'a')],
            vec![(1, 'b'), (2, 'b')],
            vec![(1, 'c')],
        ];
        let by_key = |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0);
        let merged: Vec<_> = MergingIterator::with_comparator(sources, by_key).collect();
        assert_eq!(merged, vec![(1, 'a'), (1, 'b'), (1, 'c'), (2, 'b'), (3, 'a')]);
    }

    #[test]
    fn test_descending_sources() {
        let merged: Vec<_> =
            MergingIterator::with_comparator(vec![vec![9, 3], vec![8, 7, 1]], ReverseOrder).collect();
        assert_eq!(merged, vec![9, 8, 7, 3, 1]);
    }

    #[test]
    fn test_peek_and_size_hint() {
        let mut merging = MergingIterator::new(vec![vec![5, 6], vec![2]]);
        assert_eq!(merging.peek(), Some(&2));
        assert_eq!(merging.size_hint(), (3, Some(3)));
        assert_eq!(merging.active_sources(), 2);
        assert_eq!(merging.next(), Some(2));
        assert_eq!(merging.active_sources(), 1);
    }
}

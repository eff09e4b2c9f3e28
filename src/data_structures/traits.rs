// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Collection contracts shared by every container in this crate.
//!
//! The traits are deliberately small so that each container opts into
//! exactly the capabilities it supports. Iteration is provided through
//! inherent `iter()` methods and `IntoIterator for &Container`; removal
//! during traversal goes through the container's cursor type.

use crate::error::CollectionResult;

/// A container that knows how many elements it holds.
pub trait Collection {
    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A container that can answer membership queries.
pub trait Searchable<T>: Collection {
    /// Returns `true` if an element equal to `value` is present.
    fn contains(&self, value: &T) -> bool;
}

/// A container that can drop all of its elements at once.
pub trait Clearable: Collection {
    /// Removes every element, leaving the container empty.
    fn clear(&mut self);
}

/// First-in first-out access.
pub trait Queue<T>: Searchable<T> + Clearable {
    /// Appends `value` at the back.
    fn add_last(&mut self, value: T);

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// [`crate::error::CollectionError::EmptyContainer`] if there is none.
    fn get_first(&self) -> CollectionResult<&T>;

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// [`crate::error::CollectionError::EmptyContainer`] if there is none.
    fn remove_first(&mut self) -> CollectionResult<T>;
}

/// Access at both ends.
pub trait Deque<T>: Queue<T> {
    /// Prepends `value` at the front.
    fn add_first(&mut self, value: T);

    /// Returns the back element.
    fn get_last(&self) -> CollectionResult<&T>;

    /// Removes and returns the back element.
    fn remove_last(&mut self) -> CollectionResult<T>;
}

/// Extract-min (or extract-max, depending on the comparator) access.
pub trait PriorityQueueOps<T>: Searchable<T> + Clearable {
    /// Inserts `value` according to comparator order.
    fn add(&mut self, value: T);

    /// Removes and returns the comparator-least element.
    fn remove(&mut self) -> CollectionResult<T>;

    /// Returns the comparator-least element without removing it.
    fn element(&self) -> CollectionResult<&T>;
}

/// An ordered set without duplicates.
pub trait SortedSet<T>: Searchable<T> + Clearable {
    /// Inserts `value`; returns `false` if an equal element was already present.
    fn add(&mut self, value: T) -> bool;

    /// Removes the element equal to `value`; returns `false` if it was absent.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns the least element.
    fn first(&self) -> CollectionResult<&T>;

    /// Returns the greatest element.
    fn last(&self) -> CollectionResult<&T>;
}

/// Diagnostic validation of a self-balancing structure.
///
/// Intended for tests and debugging; normal operations never rely on it.
pub trait BalanceCheck {
    /// Validates every balance invariant of the structure.
    ///
    /// # Errors
    ///
    /// [`crate::error::CollectionError::StructuralViolation`] describing the
    /// first violation found.
    fn check_balance(&self) -> CollectionResult<()>;
}

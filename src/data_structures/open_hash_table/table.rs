// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Open-addressed hash set with tombstone deletion.

use std::mem;

use crate::data_structures::open_hash_table::config::OpenHashTableConfig;
use crate::data_structures::open_hash_table::cursor::TableCursor;
use crate::data_structures::open_hash_table::probe::DoubleHash;
use crate::data_structures::traits::{Clearable, Collection, Searchable};
use crate::error::{CollectionError, CollectionResult};

/// State of a single table slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot<T> {
    /// Never occupied since the last rebuild; ends every probe walk.
    Empty,
    /// Vacated by a removal; probe walks continue past it.
    Tombstone,
    Occupied(T),
}

/// Where a probe walk for a value ended.
enum Probe {
    /// An equal element lives at this slot.
    Found(usize),
    /// The value is absent and may be placed at this slot.
    Vacant(usize),
    /// The whole sequence was walked without reaching an empty slot.
    Exhausted,
}

/// A hash set using open addressing with double hashing.
///
/// Each element chooses its own probe sequence through [`DoubleHash`].
/// Removal leaves a tombstone so walks for other elements keep going.
/// Before an insertion would push occupied plus tombstoned slots past the
/// configured load factor, the table is rebuilt: at double size if live
/// elements alone require it, otherwise at the same size to purge
/// tombstones.
#[derive(Debug, Clone)]
pub struct OpenHashTable<T> {
    /// Backing slots; the length is always a power of two
    slots: Vec<Slot<T>>,

    /// Number of occupied slots
    len: usize,

    /// Number of tombstoned slots
    tombstones: usize,

    /// Sizing and validation policy
    config: OpenHashTableConfig,

    /// Bumped on every structural mutation, checked by cursors
    version: u64,
}

impl<T> OpenHashTable<T> {
    /// Creates an empty table with the default configuration.
    pub fn new() -> Self {
        Self::with_config(OpenHashTableConfig::default())
    }

    /// Creates an empty table with at least `initial_size` slots.
    pub fn with_size(initial_size: usize) -> Self {
        Self::with_config(OpenHashTableConfig::new().with_initial_size(initial_size))
    }

    /// Creates an empty table with the given configuration.
    pub fn with_config(config: OpenHashTableConfig) -> Self {
        Self {
            slots: empty_slots(config.effective_size()),
            len: 0,
            tombstones: 0,
            config,
            version: 0,
        }
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots.
    pub fn table_size(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of tombstoned slots awaiting the next rebuild.
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Fraction of slots that are occupied or tombstoned.
    pub fn load_factor(&self) -> f64 {
        (self.len + self.tombstones) as f64 / self.slots.len() as f64
    }

    /// Returns the configuration this table was built with.
    pub fn config(&self) -> &OpenHashTableConfig {
        &self.config
    }

    /// Removes every element and returns to the initial size.
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.config.effective_size());
        self.len = 0;
        self.tombstones = 0;
        self.version += 1;
    }

    /// Iterates over the elements in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// Returns a cursor positioned before the first slot.
    pub fn cursor(&self) -> TableCursor {
        TableCursor::new(self.version)
    }

    pub(crate) fn version(&self) -> u64 {
        self.version
    }

    pub(crate) fn slot(&self, index: usize) -> Option<&Slot<T>> {
        self.slots.get(index)
    }

    /// Tombstones an occupied slot and returns its element.
    pub(crate) fn take_slot(&mut self, index: usize) -> CollectionResult<T> {
        let slot = self.slots.get_mut(index).ok_or_else(|| {
            CollectionError::InvalidArgument(format!("slot {index} out of bounds"))
        })?;
        match mem::replace(slot, Slot::Tombstone) {
            Slot::Occupied(value) => {
                self.len -= 1;
                self.tombstones += 1;
                self.version += 1;
                Ok(value)
            }
            other => {
                *slot = other;
                Err(CollectionError::violation(format!("slot {index} is not occupied")))
            }
        }
    }
}

impl<T: DoubleHash + Eq> OpenHashTable<T> {
    /// Inserts `value`. Returns `Ok(false)` without mutating the table if an
    /// equal element is already present.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] if the element's probe sequence
    /// is exhausted without yielding a free slot, or, with eager validation
    /// enabled, if it is not a permutation of the table's slots.
    pub fn add(&mut self, value: T) -> CollectionResult<bool> {
        if self.config.validate_probes {
            Self::validate_probe_sequence(&value, self.slots.len())?;
        }

        if let Probe::Found(_) = self.locate(&value) {
            return Ok(false);
        }

        let limit = self.config.effective_load_factor();
        if (self.len + self.tombstones + 1) as f64 > self.slots.len() as f64 * limit {
            let mut new_size = self.slots.len();
            while (self.len + 1) as f64 > new_size as f64 * limit {
                new_size *= 2;
            }
            self.rebuild(new_size)?;
            if self.config.validate_probes && new_size != self.slots.len() {
                Self::validate_probe_sequence(&value, new_size)?;
            }
        }

        match self.locate(&value) {
            Probe::Found(_) => Ok(false),
            Probe::Vacant(index) => {
                if let Slot::Tombstone = self.slots[index] {
                    self.tombstones -= 1;
                }
                self.slots[index] = Slot::Occupied(value);
                self.len += 1;
                self.version += 1;
                Ok(true)
            }
            Probe::Exhausted => {
                tracing::warn!(
                    table_size = self.slots.len(),
                    len = self.len,
                    "probe sequence exhausted without a free slot"
                );
                Err(CollectionError::InvalidArgument(format!(
                    "probe sequence exhausted after {} attempts without a free slot",
                    self.slots.len()
                )))
            }
        }
    }

    /// Removes the element equal to `value`; returns `false` if absent.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.locate(value) {
            Probe::Found(index) => self.take_slot(index).is_ok(),
            _ => false,
        }
    }

    /// Returns `true` if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the stored element equal to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        match self.locate(value) {
            Probe::Found(index) => match &self.slots[index] {
                Slot::Occupied(stored) => Some(stored),
                _ => None,
            },
            _ => None,
        }
    }

    /// Checks that `value`'s probe sequence visits every slot of a table
    /// with `table_size` slots exactly once.
    ///
    /// # Errors
    ///
    /// [`CollectionError::InvalidArgument`] naming the first out-of-range or
    /// repeated slot.
    pub fn validate_probe_sequence(value: &T, table_size: usize) -> CollectionResult<()> {
        let mut seen = vec![false; table_size];
        for probe_index in 0..table_size {
            let slot = value.probe(table_size, probe_index);
            let failure = match seen.get_mut(slot) {
                None => Some(format!(
                    "probe {probe_index} yields slot {slot}, outside a table of size {table_size}"
                )),
                Some(true) => Some(format!(
                    "probe {probe_index} revisits slot {slot} in a table of size {table_size}"
                )),
                Some(visited) => {
                    *visited = true;
                    None
                }
            };
            if let Some(message) = failure {
                tracing::warn!(table_size, probe_index, slot, "invalid probe sequence");
                return Err(CollectionError::InvalidArgument(message));
            }
        }
        Ok(())
    }

    /// Walks the probe sequence of `value`, remembering the first tombstone
    /// so an insertion can reuse it.
    fn locate(&self, value: &T) -> Probe {
        let size = self.slots.len();
        let mut first_tombstone = None;
        for probe_index in 0..size {
            let index = value.probe(size, probe_index) % size;
            match &self.slots[index] {
                Slot::Empty => return Probe::Vacant(first_tombstone.unwrap_or(index)),
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(index);
                }
                Slot::Occupied(stored) if stored == value => return Probe::Found(index),
                Slot::Occupied(_) => {}
            }
        }
        match first_tombstone {
            Some(index) => Probe::Vacant(index),
            None => Probe::Exhausted,
        }
    }

    /// Re-places every live element into `new_size` fresh slots, dropping
    /// all tombstones. The table is left untouched if any element cannot
    /// be placed.
    fn rebuild(&mut self, new_size: usize) -> CollectionResult<()> {
        let mut taken = vec![false; new_size];
        let mut moves = Vec::with_capacity(self.len);

        for (old_index, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied(value) = slot {
                if self.config.validate_probes {
                    Self::validate_probe_sequence(value, new_size)?;
                }
                let target = (0..new_size)
                    .map(|probe_index| value.probe(new_size, probe_index) % new_size)
                    .find(|&index| !taken[index])
                    .ok_or_else(|| {
                        tracing::warn!(new_size, "probe sequence exhausted during rebuild");
                        CollectionError::InvalidArgument(format!(
                            "probe sequence exhausted while rebuilding to {new_size} slots"
                        ))
                    })?;
                taken[target] = true;
                moves.push((old_index, target));
            }
        }

        let mut slots = empty_slots(new_size);
        for (old_index, target) in moves {
            slots[target] = mem::replace(&mut self.slots[old_index], Slot::Empty);
        }

        tracing::debug!(
            old_size = self.slots.len(),
            new_size,
            len = self.len,
            purged_tombstones = self.tombstones,
            "hash table rebuilt"
        );
        self.slots = slots;
        self.tombstones = 0;
        self.version += 1;
        Ok(())
    }
}

fn empty_slots<T>(size: usize) -> Vec<Slot<T>> {
    let mut slots = Vec::with_capacity(size);
    slots.resize_with(size, || Slot::Empty);
    slots
}

impl<T> Default for OpenHashTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over the elements of an [`OpenHashTable`] in slot order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Slot<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(value) = slot {
                self.remaining -= 1;
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OpenHashTable<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Collection for OpenHashTable<T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T: DoubleHash + Eq> Searchable<T> for OpenHashTable<T> {
    fn contains(&self, value: &T) -> bool {
        OpenHashTable::contains(self, value)
    }
}

impl<T> Clearable for OpenHashTable<T> {
    fn clear(&mut self) {
        OpenHashTable::clear(self)
    }
}

//! `PlacementQueue` — pending units bucketed by destination height.
//!
//! Heights are few (one per grid layer) and units per height are many, so
//! each height owns a FIFO bucket and the `BTreeMap` only ever orders a
//! handful of keys.  Both `enqueue` and `dequeue` are O(log H).

use std::collections::{BTreeMap, VecDeque};

use cf_core::{SimRng, UnitId};

/// Min-height-first queue of unit ids.
#[derive(Clone, Debug, Default)]
pub struct PlacementQueue {
    inner: BTreeMap<i32, VecDeque<UnitId>>,
    /// Cached total unit count for O(1) `len()`.
    total: usize,
}

impl PlacementQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the queue for a whole run from `(unit, destination height)`
    /// pairs.
    ///
    /// With `shuffle_ties` the pairs are permuted once before insertion.
    /// Height order is unaffected; only the relative order of units sharing
    /// a height changes.  Without it, ties keep the order of `entries`.
    pub fn build(mut entries: Vec<(UnitId, i32)>, shuffle_ties: bool, rng: &mut SimRng) -> Self {
        if shuffle_ties {
            rng.shuffle(&mut entries);
        }
        let mut queue = Self::new();
        for (unit, height) in entries {
            queue.enqueue(unit, height);
        }
        queue
    }

    /// Add `unit` behind every unit already queued at `height`.
    pub fn enqueue(&mut self, unit: UnitId, height: i32) {
        self.inner.entry(height).or_default().push_back(unit);
        self.total += 1;
    }

    /// Remove and return the oldest unit of the lowest queued height.
    pub fn dequeue(&mut self) -> Option<(UnitId, i32)> {
        let mut lowest = self.inner.first_entry()?;
        let height = *lowest.key();
        let unit = lowest.get_mut().pop_front();
        if lowest.get().is_empty() {
            lowest.remove();
        }
        let unit = unit?;
        self.total -= 1;
        Some((unit, height))
    }

    /// Height of the next unit `dequeue` would return.
    pub fn peek_height(&self) -> Option<i32> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct heights with at least one queued unit.
    pub fn height_count(&self) -> usize {
        self.inner.len()
    }

    /// Drop every queued unit.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }
}

impl Iterator for PlacementQueue {
    type Item = (UnitId, i32);

    fn next(&mut self) -> Option<Self::Item> {
        self.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.total, Some(self.total))
    }
}

//! Append-only collections and one-way flags.
//!
//! Neither type offers a way to undo a write, so progress recorded in a
//! run can only grow.

use serde::Serialize;

/// An ordered, deduplicated, append-only list.
///
/// Iteration order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger<T> {
    entries: Vec<T>,
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: PartialEq> Ledger<T> {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unless it is already present.
    ///
    /// Returns `true` if the entry was new.
    pub fn insert(&mut self, entry: T) -> bool {
        if self.entries.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Check whether an entry has been recorded.
    pub fn contains(&self, entry: &T) -> bool {
        self.entries.contains(entry)
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// The recorded entries as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }
}

impl<'a, T> IntoIterator for &'a Ledger<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A boolean that can be set but never cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Latch(bool);

impl Latch {
    /// Whether the latch has been set.
    pub fn is_set(self) -> bool {
        self.0
    }

    /// Set the latch. Returns `true` if this call flipped it.
    pub fn set(&mut self) -> bool {
        let flipped = !self.0;
        self.0 = true;
        flipped
    }
}

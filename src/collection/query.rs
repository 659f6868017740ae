use std::cmp::Ordering;

use super::model::FilteredCollection;
use crate::error::{CollectionError, Result};

// ---------------------------------------------------------------------------
// Materializing queries – produce a new collection with an empty chain
// ---------------------------------------------------------------------------

impl<T: Clone> FilteredCollection<T> {
    /// Evaluate the chain and return the passing items as a new collection.
    pub fn all(&self) -> Self {
        let items: Vec<T> = self.matching().cloned().collect();
        log::debug!(
            "all: {} of {} items passed {} filters",
            items.len(),
            self.items.len(),
            self.filters.len()
        );
        Self::new(items)
    }

    /// Return passing items whose 1-based position among passing items lies
    /// in `start..=end`.
    ///
    /// Counting is over passing items only, not raw indices. `start = 0`
    /// behaves like `start = 1`; `start > end` gives an empty collection.
    pub fn range(&self, start: usize, end: usize) -> Self {
        let items: Vec<T> = self
            .matching()
            .enumerate()
            .map(|(n, item)| (n + 1, item))
            .take_while(|(counter, _)| *counter <= end)
            .filter(|(counter, _)| *counter >= start)
            .map(|(_, item)| item.clone())
            .collect();
        log::debug!(
            "range {start}..={end}: kept {} of {} items",
            items.len(),
            self.items.len()
        );
        Self::new(items)
    }

    // -----------------------------------------------------------------------
    // Sorting – the chain is kept and stays unevaluated
    // -----------------------------------------------------------------------

    /// Return a copy whose backing sequence is sorted with `compare`.
    ///
    /// The sort is stable. Filters are carried over as-is, so index-based
    /// predicates see positions in the *sorted* sequence.
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut clone = self.clone();
        clone.items.sort_by(compare);
        log::debug!(
            "sort: {} items, {} filters kept",
            clone.items.len(),
            clone.filters.len()
        );
        clone
    }

    /// Sort by a key extracted from each item.
    pub fn sort_by_key<K, F>(&self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)))
    }

    // -----------------------------------------------------------------------
    // Lenient accessors with a caller-supplied default
    // -----------------------------------------------------------------------

    /// [`first`](Self::first), or `default` when nothing matches.
    pub fn first_or(&self, default: T) -> T {
        self.first().cloned().unwrap_or(default)
    }

    /// [`last`](Self::last), or `default` when nothing matches.
    pub fn last_or(&self, default: T) -> T {
        self.last().cloned().unwrap_or(default)
    }

    /// [`item`](Self::item), or `default` when the index is out of range
    /// or filtered out.
    pub fn item_or(&self, index: usize, default: T) -> T {
        self.item(index).cloned().unwrap_or(default)
    }
}

impl<T: Clone + Ord> FilteredCollection<T> {
    /// Return a copy sorted by the natural ordering of `T`.
    pub fn sort(&self) -> Self {
        self.sort_by(Ord::cmp)
    }
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

impl<T> FilteredCollection<T> {
    /// First item, scanning forward, that passes the chain.
    pub fn first(&self) -> Option<&T> {
        self.matching().next()
    }

    /// Last item, scanning backward, that passes the chain.
    pub fn last(&self) -> Option<&T> {
        self.items
            .iter()
            .enumerate()
            .rev()
            .find(|(i, item)| self.matches(item, *i))
            .map(|(_, item)| item)
    }

    /// Item at original position `index`, if it exists and passes the chain.
    ///
    /// Out-of-range and filtered-out positions both yield `None`.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.try_item(index).ok()
    }

    /// Like [`item`](Self::item) but reports why nothing was returned.
    pub fn try_item(&self, index: usize) -> Result<&T> {
        let item = self
            .items
            .get(index)
            .ok_or(CollectionError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })?;
        if self.matches(item, index) {
            Ok(item)
        } else {
            Err(CollectionError::FilteredOut { index })
        }
    }
}

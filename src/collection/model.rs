use std::fmt;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::filter::Filter;

// ---------------------------------------------------------------------------
// FilteredCollection – backing sequence plus a filter chain
// ---------------------------------------------------------------------------

/// An ordered sequence of items together with an ordered chain of predicates.
///
/// Instances are never modified after construction: [`select`], [`all`],
/// [`range`] and the sort methods all return a new collection that owns its
/// own copy of the items.
///
/// [`select`]: FilteredCollection::select
/// [`all`]: FilteredCollection::all
/// [`range`]: FilteredCollection::range
pub struct FilteredCollection<T> {
    /// Backing sequence, in original order.
    pub(crate) items: Vec<T>,
    /// Predicates an item must all satisfy to be part of a result.
    pub(crate) filters: Vec<Filter<T>>,
}

impl<T> FilteredCollection<T> {
    /// Wrap `items` with an empty filter chain.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            filters: Vec::new(),
        }
    }

    /// Wrap `items` with an initial filter chain.
    pub fn with_filters(items: Vec<T>, filters: Vec<Filter<T>>) -> Self {
        Self { items, filters }
    }

    /// Number of items in the backing sequence (filters not applied).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the backing sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of predicates in the filter chain.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Borrow the backing sequence (filters not applied).
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate the backing sequence (filters not applied).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consume the collection and return its backing sequence.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> FilteredCollection<T> {
    /// Copy `items` into a new collection with an empty filter chain.
    pub fn from_slice(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }

    /// Copy of the backing sequence.
    ///
    /// The filter chain is *not* applied; call [`all`](Self::all) first to
    /// get the filtered items.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Clone> Clone for FilteredCollection<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            filters: self.filters.clone(),
        }
    }
}

impl<T> Default for FilteredCollection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for FilteredCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for FilteredCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for FilteredCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FilteredCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for FilteredCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredCollection")
            .field("items", &self.items)
            .field("filters", &self.filters.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// serde – predicates are not data, so only matching items are written out
// ---------------------------------------------------------------------------

impl<T: Serialize> Serialize for FilteredCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for item in self.matching() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FilteredCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}

use std::rc::Rc;

use super::model::FilteredCollection;

// ---------------------------------------------------------------------------
// Filter predicate: item + its index in the backing sequence
// ---------------------------------------------------------------------------

/// A predicate in the filter chain.
///
/// Receives the item and its position in the *original* backing sequence.
/// Handles are shared between collections; predicates are immutable `Fn`s.
pub type Filter<T> = Rc<dyn Fn(&T, usize) -> bool>;

impl<T: Clone> FilteredCollection<T> {
    /// Return a copy of this collection with `predicate` appended to the chain.
    ///
    /// Nothing is evaluated here; the chain only runs in a terminal operation.
    pub fn select<F>(&self, predicate: F) -> Self
    where
        F: Fn(&T, usize) -> bool + 'static,
    {
        let mut clone = self.clone();
        clone.filters.push(Rc::new(predicate));
        log::trace!("select: filter chain now has {} predicates", clone.filters.len());
        clone
    }
}

impl<T> FilteredCollection<T> {
    /// Whether `item` at original position `index` passes every filter.
    ///
    /// Evaluation follows chain order and stops at the first rejecting
    /// predicate. An empty chain accepts everything.
    pub fn matches(&self, item: &T, index: usize) -> bool {
        self.filters.iter().all(|filter| filter(item, index))
    }

    /// Lazily iterate the items that pass the chain, in original order.
    pub fn matching(&self) -> impl Iterator<Item = &T> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(move |(i, item)| self.matches(item, *i))
            .map(|(_, item)| item)
    }

    /// Return original indices of the items that pass the chain.
    pub fn matching_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, item)| self.matches(item, *i))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of items that pass the chain.
    pub fn count(&self) -> usize {
        self.matching().count()
    }
}

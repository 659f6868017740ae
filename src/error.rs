use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure modes of the strict accessors.
///
/// The lenient accessors (`first`, `last`, `item` and their `*_or` variants)
/// never fail; they report absence through `None` or the caller's default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The requested position lies past the end of the backing sequence.
    #[error("index {index} is out of range for a collection of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// The position exists but the item there is rejected by the filter chain.
    #[error("item at index {index} does not pass the filter chain")]
    FilteredOut { index: usize },
}

pub type Result<T> = std::result::Result<T, CollectionError>;

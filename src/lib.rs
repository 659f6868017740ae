//! Immutable, lazily-filtered collections.
//!
//! A [`FilteredCollection`] pairs a backing sequence with a chain of
//! `(item, index) -> bool` predicates. [`select`](FilteredCollection::select)
//! only extends the chain; terminal operations such as
//! [`all`](FilteredCollection::all), [`first`](FilteredCollection::first) or
//! [`range`](FilteredCollection::range) evaluate it.
//!
//! ```
//! use filtered_collection::FilteredCollection;
//!
//! let fruits = FilteredCollection::from(vec!["apple", "pear", "banana", "pineapple", "kiwi"]);
//! let picked = fruits
//!     .select(|f, _| f.contains('a'))
//!     .select(|f, _| f.contains('p'))
//!     .all()
//!     .to_vec();
//! assert_eq!(picked, vec!["apple", "pear", "pineapple"]);
//! ```

pub mod collection;
pub mod error;

pub use collection::filter::Filter;
pub use collection::model::FilteredCollection;
pub use error::{CollectionError, Result};

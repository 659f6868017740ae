//! Collection layer: the backing sequence, its filter chain, and queries.
//!
//! Architecture:
//! ```text
//!   Vec<T>
//!     │
//!     ▼
//!   ┌──────────┐
//!   │  model    │  FilteredCollection: items + filter chain
//!   └──────────┘
//!     │
//!     ▼
//!   ┌──────────┐
//!   │  filter   │  select() appends predicates, matches() evaluates them
//!   └──────────┘
//!     │
//!     ▼
//!   ┌──────────┐
//!   │  query    │  all / first / last / item / range / sort
//!   └──────────┘
//! ```

pub mod filter;
pub mod model;
pub mod query;

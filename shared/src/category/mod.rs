//! Category hierarchy engine
//!
//! Owns the in-memory representation of the category tree, derived views
//! (flattened picker list, breadcrumb paths, search-filtered subtrees), and
//! the validation gates in front of every mutating operation. Everything
//! here is pure and synchronous; the network boundary lives in the client
//! crate, which consults these gates before dispatching and rebuilds the
//! tree from a full re-fetch afterwards.

pub mod expansion;
pub mod search;
pub mod tree;
pub mod validate;

pub use expansion::ExpansionState;
pub use search::{filter_by_search, matched_expansion};
pub use tree::{CategoryTree, FlatCategory};
pub use validate::{CategoryForm, would_create_circular_reference};

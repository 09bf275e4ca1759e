//! Tree expansion state for the admin view
//!
//! Presentational only: which category rows are expanded lives in an
//! id-keyed set owned by the view layer, never on the domain tree itself.
//! Every transformation returns a new state, so concurrent readers never
//! observe a half-toggled view.

use super::tree::CategoryTree;
use std::collections::BTreeSet;

/// Immutable set of expanded category ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    /// Fully collapsed state
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state with the given ids expanded
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expanded: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a category row is expanded
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// New state with the given id flipped
    #[must_use]
    pub fn toggled(&self, id: &str) -> Self {
        let mut expanded = self.expanded.clone();
        if !expanded.remove(id) {
            expanded.insert(id.to_string());
        }
        Self { expanded }
    }

    /// New state with every category in the tree expanded
    #[must_use]
    pub fn expanded_all(tree: &CategoryTree) -> Self {
        Self {
            expanded: tree.iter().map(|c| c.id.clone()).collect(),
        }
    }

    /// New, fully collapsed state
    #[must_use]
    pub fn collapsed_all() -> Self {
        Self::new()
    }

    /// Number of expanded rows
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether nothing is expanded
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

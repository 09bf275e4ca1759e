//! Client-side search over the category tree
//!
//! Filters a large tree without losing structural context: a node is kept
//! when it matches the term or any descendant does, and the ancestor chain
//! of every match is reported expanded so results stay visible. The input
//! tree is never mutated.

use super::expansion::ExpansionState;
use super::tree::CategoryTree;
use std::collections::HashSet;

/// Filter the tree by a free-text term.
///
/// Case-insensitive substring match over name, description, and the
/// computed breadcrumb path. Returns a new tree containing every matching
/// node plus its ancestors; a blank or whitespace-only term returns the
/// tree unchanged.
pub fn filter_by_search(tree: &CategoryTree, term: &str) -> CategoryTree {
    match retained_ids(tree, term) {
        None => tree.clone(),
        Some(keep) => {
            let records = tree
                .iter()
                .filter(|c| keep.contains(c.id.as_str()))
                .cloned()
                .collect();
            CategoryTree::build(records)
        }
    }
}

/// Expansion state accompanying [`filter_by_search`]: every retained node
/// (matches and their ancestors) is expanded so matches are visible.
///
/// A blank term yields a collapsed state; the view keeps whatever state it
/// had before the search began.
pub fn matched_expansion(tree: &CategoryTree, term: &str) -> ExpansionState {
    match retained_ids(tree, term) {
        None => ExpansionState::new(),
        Some(keep) => ExpansionState::from_ids(keep),
    }
}

/// Ids to retain for a search term: matches plus their ancestor chains.
/// `None` when the term is blank (no filtering applies).
fn retained_ids(tree: &CategoryTree, term: &str) -> Option<HashSet<String>> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut keep = HashSet::new();
    for flat in tree.flatten() {
        let description = tree
            .get(&flat.id)
            .and_then(|c| c.description.as_deref())
            .unwrap_or_default();
        let matched = flat.name.to_lowercase().contains(&needle)
            || description.to_lowercase().contains(&needle)
            || flat.full_path.to_lowercase().contains(&needle);
        if matched {
            for ancestor in tree.path(&flat.id) {
                keep.insert(ancestor.id.clone());
            }
        }
    }
    Some(keep)
}

#[cfg(test)]
mod tests {
    use super::super::tree::tests::{cat, sample_tree};
    use super::*;
    use crate::models::Category;

    fn described(mut category: Category, description: &str) -> Category {
        category.description = Some(description.to_string());
        category
    }

    #[test]
    fn test_blank_term_returns_tree_unchanged() {
        let tree = sample_tree();
        assert_eq!(filter_by_search(&tree, ""), tree);
        assert_eq!(filter_by_search(&tree, "   "), tree);
        assert!(matched_expansion(&tree, "  ").is_empty());
    }

    #[test]
    fn test_match_keeps_non_matching_ancestors_expanded() {
        // Root -> A -> B where only B matches
        let tree = CategoryTree::build(vec![
            cat("root", None, "Infrastructure", 0),
            cat("a", Some("root"), "Servers", 0),
            cat("b", Some("a"), "Backup jobs", 0),
        ]);
        let filtered = filter_by_search(&tree, "backup");
        assert_eq!(filtered.len(), 3);
        assert!(filtered.contains("root"));
        assert!(filtered.contains("a"));
        assert!(filtered.contains("b"));

        let expansion = matched_expansion(&tree, "backup");
        assert!(expansion.is_expanded("root"));
        assert!(expansion.is_expanded("a"));
        assert!(expansion.is_expanded("b"));
    }

    #[test]
    fn test_non_matching_branches_dropped() {
        let tree = sample_tree();
        let filtered = filter_by_search(&tree, "leaf");
        assert!(filtered.contains("leaf"));
        assert!(filtered.contains("mid"));
        assert!(filtered.contains("root"));
        assert!(!filtered.contains("other"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let tree = sample_tree();
        assert!(filter_by_search(&tree, "LEAF").contains("leaf"));
    }

    #[test]
    fn test_description_matches() {
        let tree = CategoryTree::build(vec![described(
            cat("a", None, "Email", 0),
            "Exchange and SMTP relay issues",
        )]);
        assert!(filter_by_search(&tree, "smtp").contains("a"));
    }

    #[test]
    fn test_full_path_matches() {
        // "Root > Mid" appears in Leaf's breadcrumb, so searching for the
        // root's name retains the whole chain below it too
        let tree = sample_tree();
        let filtered = filter_by_search(&tree, "root > mid");
        assert!(filtered.contains("mid"));
        assert!(filtered.contains("leaf"));
    }

    #[test]
    fn test_input_tree_untouched() {
        let tree = sample_tree();
        let before = tree.clone();
        let _ = filter_by_search(&tree, "leaf");
        assert_eq!(tree, before);
    }

    #[test]
    fn test_no_matches_yields_empty_tree() {
        let tree = sample_tree();
        let filtered = filter_by_search(&tree, "zzz");
        assert!(filtered.is_empty());
    }
}

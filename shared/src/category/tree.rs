//! Category tree construction and traversal
//!
//! The store returns categories as a flat list; the tree is reconstructed
//! client-side from `parent_id`. Records live in a single id-keyed map and
//! structure is held as id references, so derived views (flatten, path) are
//! recomputed on demand instead of mutating nested nodes.

use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// In-memory category hierarchy, built from a flat record collection
///
/// Each tree is an independent snapshot: all transformations over it return
/// new values rather than mutating in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTree {
    nodes: HashMap<String, Category>,
    /// Structural parent edges, recorded only for resolvable parents
    parent_of: HashMap<String, String>,
    /// Ordered child ids per parent (sort_order, then input position)
    children: HashMap<String, Vec<String>>,
    /// Ordered root ids
    roots: Vec<String>,
}

/// One row of the flattened, depth-ordered category list
///
/// Shaped for `<select>`-style pickers and breadcrumbs: pre-order position,
/// indentation via `full_name`, breadcrumb via `full_path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatCategory {
    pub id: String,
    pub name: String,
    /// 0-based depth
    pub level: usize,
    /// Name prefixed with two spaces of indent per level
    pub full_name: String,
    /// Breadcrumb from root to this node, e.g. `"Hardware > Printers"`
    pub full_path: String,
    pub is_active: bool,
    pub sort_order: i32,
}

impl CategoryTree {
    /// Build a tree from a flat record collection.
    ///
    /// Records are indexed by id first, so parent resolution is independent
    /// of input order. A record whose `parent_id` does not resolve to a
    /// known id (or points at itself) is promoted to root rather than
    /// dropped; the store may return partial pages.
    ///
    /// Never fails. Cycle prevention happens at mutation time, not here: a
    /// record can only be attached under a parent present in the index, so
    /// this single pass cannot build an unterminated structure.
    pub fn build(records: Vec<Category>) -> Self {
        let ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
        let positions: HashMap<&str, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        let mut nodes: HashMap<String, Category> = HashMap::with_capacity(records.len());
        for record in records {
            nodes.insert(record.id.clone(), record);
        }

        let mut parent_of: HashMap<String, String> = HashMap::new();
        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        let mut roots: Vec<String> = Vec::new();

        // Input order here makes the later stable sort tie-break on the
        // original collection order.
        for id in &ids {
            let parent = nodes
                .get(id)
                .and_then(|n| n.parent_id.as_deref())
                .filter(|p| *p != id && nodes.contains_key(*p))
                .map(str::to_string);
            match parent {
                Some(parent_id) => {
                    children.entry(parent_id.clone()).or_default().push(id.clone());
                    parent_of.insert(id.clone(), parent_id);
                }
                None => roots.push(id.clone()),
            }
        }

        let mut sort_key = |id: &String| {
            let order = nodes.get(id).map(|n| n.sort_order).unwrap_or_default();
            let position = positions.get(id.as_str()).copied().unwrap_or(usize::MAX);
            (order, position)
        };
        roots.sort_by_key(&mut sort_key);
        for siblings in children.values_mut() {
            siblings.sort_by_key(&mut sort_key);
        }

        Self {
            nodes,
            parent_of,
            children,
            roots,
        }
    }

    /// Look up a category by id
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.nodes.get(id)
    }

    /// Whether the tree contains the id
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Total number of categories in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no categories
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root categories in display order
    pub fn roots(&self) -> impl Iterator<Item = &Category> {
        self.roots.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Direct children of a category in display order
    pub fn children_of(&self, id: &str) -> impl Iterator<Item = &Category> {
        self.children
            .get(id)
            .into_iter()
            .flatten()
            .filter_map(|child| self.nodes.get(child))
    }

    /// Structural parent of a category, if it was attached under one
    pub fn parent_of(&self, id: &str) -> Option<&Category> {
        self.parent_of.get(id).and_then(|p| self.nodes.get(p))
    }

    /// All records in pre-order (children after their parent)
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.preorder_ids().into_iter().filter_map(|id| self.nodes.get(&id))
    }

    /// All transitive descendant ids of a category, excluding the node itself.
    ///
    /// Breadth-first; order within the result carries no meaning.
    pub fn descendant_ids(&self, id: &str) -> HashSet<String> {
        let mut found = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(id);
        while let Some(current) = queue.pop_front() {
            if let Some(child_ids) = self.children.get(current) {
                for child in child_ids {
                    if found.insert(child.clone()) {
                        queue.push_back(child);
                    }
                }
            }
        }
        found
    }

    /// Number of transitive descendants, surfaced to the caller before a
    /// delete is offered (cascade policy itself belongs to the store)
    pub fn descendant_count(&self, id: &str) -> usize {
        self.descendant_ids(id).len()
    }

    /// Ordered ancestors from root to the target, inclusive.
    ///
    /// Empty when the id is unknown. Walks structural edges only, so raw
    /// records with mutually-referencing parents cannot loop the walk.
    pub fn path(&self, id: &str) -> Vec<&Category> {
        let Some(target) = self.nodes.get(id) else {
            return Vec::new();
        };
        let mut chain = vec![target];
        let mut seen: HashSet<&str> = HashSet::from([id]);
        let mut current = id;
        while let Some(parent_id) = self.parent_of.get(current) {
            if !seen.insert(parent_id) {
                break;
            }
            match self.nodes.get(parent_id) {
                Some(parent) => chain.push(parent),
                None => break,
            }
            current = parent_id;
        }
        chain.reverse();
        chain
    }

    /// Flatten the tree into a depth-ordered list.
    ///
    /// Pre-order traversal: children of a node appear, in order, immediately
    /// after their parent and before the parent's next sibling, so the list
    /// can back a picker directly with indentation implying depth. Pure and
    /// idempotent over an unmodified tree.
    pub fn flatten(&self) -> Vec<FlatCategory> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for root in &self.roots {
            self.flatten_into(root, 0, None, &mut out);
        }
        out
    }

    fn flatten_into(
        &self,
        id: &str,
        level: usize,
        parent_path: Option<&str>,
        out: &mut Vec<FlatCategory>,
    ) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        let full_path = match parent_path {
            Some(prefix) => format!("{} > {}", prefix, node.name),
            None => node.name.clone(),
        };
        let full_name = format!("{}{}", "  ".repeat(level), node.name);
        out.push(FlatCategory {
            id: node.id.clone(),
            name: node.name.clone(),
            level,
            full_name,
            full_path: full_path.clone(),
            is_active: node.is_active,
            sort_order: node.sort_order,
        });
        if let Some(child_ids) = self.children.get(id) {
            for child in child_ids {
                self.flatten_into(child, level + 1, Some(&full_path), out);
            }
        }
    }

    fn preorder_ids(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<&String> = self.roots.iter().rev().collect();
        while let Some(id) = stack.pop() {
            out.push(id.clone());
            if let Some(child_ids) = self.children.get(id) {
                stack.extend(child_ids.iter().rev());
            }
        }
        out
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Utc;

    /// Test fixture: a category with the given id/parent/name/sort_order
    pub(crate) fn cat(id: &str, parent: Option<&str>, name: &str, sort_order: i32) -> Category {
        Category {
            id: id.to_string(),
            parent_id: parent.map(str::to_string),
            name: name.to_string(),
            description: None,
            color: Default::default(),
            icon: Default::default(),
            sort_order,
            sla_response_hours: 24,
            sla_resolution_hours: 72,
            auto_assign_to: None,
            is_active: true,
            ticket_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Root -> Mid -> Leaf plus a second root
    pub(crate) fn sample_tree() -> CategoryTree {
        CategoryTree::build(vec![
            cat("root", None, "Root", 0),
            cat("mid", Some("root"), "Mid", 0),
            cat("leaf", Some("mid"), "Leaf", 0),
            cat("other", None, "Other", 1),
        ])
    }

    #[test]
    fn test_build_visits_every_record() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.flatten().len(), 4);
    }

    #[test]
    fn test_flatten_children_after_parent() {
        let flat = sample_tree().flatten();
        let position = |id: &str| flat.iter().position(|f| f.id == id).unwrap();
        assert!(position("root") < position("mid"));
        assert!(position("mid") < position("leaf"));
        // pre-order: whole subtree before the next root
        assert!(position("leaf") < position("other"));
    }

    #[test]
    fn test_flatten_levels_and_paths() {
        let flat = sample_tree().flatten();
        let leaf = flat.iter().find(|f| f.id == "leaf").unwrap();
        assert_eq!(leaf.level, 2);
        assert_eq!(leaf.full_path, "Root > Mid > Leaf");
        assert_eq!(leaf.full_name, "    Leaf");
        let root = flat.iter().find(|f| f.id == "root").unwrap();
        assert_eq!(root.level, 0);
        assert_eq!(root.full_name, "Root");
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let tree = sample_tree();
        assert_eq!(tree.flatten(), tree.flatten());
    }

    #[test]
    fn test_sibling_order_stable_sort() {
        // Equal sort_order: original collection order breaks the tie
        let tree = CategoryTree::build(vec![
            cat("b", None, "B", 5),
            cat("c", None, "C", 5),
            cat("a", None, "A", 1),
        ]);
        let ids: Vec<&str> = tree.roots().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_orphan_promoted_to_root() {
        let tree = CategoryTree::build(vec![
            cat("a", None, "A", 0),
            cat("b", Some("missing"), "B", 1),
        ]);
        let roots: Vec<&str> = tree.roots().map(|c| c.id.as_str()).collect();
        assert_eq!(roots, vec!["a", "b"]);
        assert!(tree.parent_of("b").is_none());
    }

    #[test]
    fn test_self_referencing_record_promoted_to_root() {
        let tree = CategoryTree::build(vec![cat("a", Some("a"), "A", 0)]);
        assert_eq!(tree.roots().count(), 1);
        assert!(tree.parent_of("a").is_none());
    }

    #[test]
    fn test_path_root_to_target() {
        let tree = sample_tree();
        let names: Vec<&str> = tree.path("leaf").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Root", "Mid", "Leaf"]);
    }

    #[test]
    fn test_path_unknown_id_is_empty() {
        assert!(sample_tree().path("nope").is_empty());
    }

    #[test]
    fn test_path_terminates_on_mutually_referencing_records() {
        // A <-> B in raw parent_id fields; both attach under each other and
        // neither is reachable from a root, but path() must still terminate.
        let tree = CategoryTree::build(vec![
            cat("a", Some("b"), "A", 0),
            cat("b", Some("a"), "B", 0),
        ]);
        assert!(tree.path("a").len() <= 2);
    }

    #[test]
    fn test_descendant_ids_and_count() {
        let tree = sample_tree();
        let descendants = tree.descendant_ids("root");
        assert!(descendants.contains("mid"));
        assert!(descendants.contains("leaf"));
        assert!(!descendants.contains("root"));
        assert!(!descendants.contains("other"));
        assert_eq!(tree.descendant_count("root"), 2);
        assert_eq!(tree.descendant_count("leaf"), 0);
    }

    #[test]
    fn test_children_of_display_order() {
        let tree = CategoryTree::build(vec![
            cat("p", None, "P", 0),
            cat("y", Some("p"), "Y", 2),
            cat("x", Some("p"), "X", 1),
        ]);
        let ids: Vec<&str> = tree.children_of("p").map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y"]);
    }

    #[test]
    fn test_iter_matches_flatten_order() {
        let tree = sample_tree();
        let from_iter: Vec<String> = tree.iter().map(|c| c.id.clone()).collect();
        let from_flatten: Vec<String> = tree.flatten().into_iter().map(|f| f.id).collect();
        assert_eq!(from_iter, from_flatten);
    }
}

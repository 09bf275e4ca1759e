//! Mutation gates for the category hierarchy
//!
//! Every reparent and create/edit payload is validated here, against the
//! current tree snapshot, before anything is sent to the store. All checks
//! are pure, synchronous, and read-only.

use super::tree::CategoryTree;
use crate::error::ValidationErrors;
use crate::models::{Category, CategoryColor, CategoryCreate, CategoryIcon, CategoryUpdate};

/// Whether reparenting `category_id` under `proposed_parent_id` would
/// create a cycle.
///
/// A move is illegal if the proposed parent is the category itself, or any
/// of its transitive descendants. Moving to root (`None`) is always legal,
/// as is a no-op move to the current parent. An unknown `category_id`
/// reports no cycle; the store rejects the id itself.
pub fn would_create_circular_reference(
    tree: &CategoryTree,
    category_id: &str,
    proposed_parent_id: Option<&str>,
) -> bool {
    let Some(proposed) = proposed_parent_id else {
        return false;
    };
    if proposed == category_id {
        return true;
    }
    tree.descendant_ids(category_id).contains(proposed)
}

/// Category create/edit form state
///
/// Carries the documented defaults: neutral gray, folder glyph, sort order
/// 0, 24h response / 72h resolution, active.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<String>,
    pub color: CategoryColor,
    pub icon: CategoryIcon,
    pub sort_order: i32,
    pub sla_response_hours: u32,
    pub sla_resolution_hours: u32,
    pub auto_assign_to: Option<String>,
    pub is_active: bool,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            parent_id: None,
            color: CategoryColor::default(),
            icon: CategoryIcon::default(),
            sort_order: 0,
            sla_response_hours: 24,
            sla_resolution_hours: 72,
            auto_assign_to: None,
            is_active: true,
        }
    }
}

impl CategoryForm {
    /// Pre-fill the form from an existing category for editing
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            parent_id: category.parent_id.clone(),
            color: category.color,
            icon: category.icon,
            sort_order: category.sort_order,
            sla_response_hours: category.sla_response_hours,
            sla_resolution_hours: category.sla_resolution_hours,
            auto_assign_to: category.auto_assign_to.clone(),
            is_active: category.is_active,
        }
    }

    /// Validate the form against the current tree snapshot.
    ///
    /// `editing` carries the id of the category being edited, or `None` on
    /// create. Every rule is checked and every failure reported, keyed by
    /// field name; there is no first-error short-circuit.
    pub fn validate(
        &self,
        tree: &CategoryTree,
        editing: Option<&str>,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }

        if self.sla_response_hours < 1 {
            errors.insert("sla_response_hours", "Response time must be at least 1 hour");
        }
        if self.sla_resolution_hours < 1 {
            errors.insert(
                "sla_resolution_hours",
                "Resolution time must be at least 1 hour",
            );
        } else if self.sla_response_hours > self.sla_resolution_hours {
            // Cross-field rule attributed to the resolution field
            errors.insert(
                "sla_resolution_hours",
                "Resolution time cannot be shorter than response time",
            );
        }

        if let Some(parent_id) = self.parent_id.as_deref() {
            if !tree.contains(parent_id) {
                errors.insert("parent_id", "Parent category not found");
            } else if let Some(own_id) = editing {
                if parent_id == own_id {
                    errors.insert("parent_id", "Category cannot be its own parent");
                } else if would_create_circular_reference(tree, own_id, Some(parent_id)) {
                    errors.insert(
                        "parent_id",
                        "Cannot move a category under one of its own subcategories",
                    );
                }
            }
        }

        errors.into_result()
    }

    /// Convert into the create payload for dispatch
    pub fn into_create(self) -> CategoryCreate {
        CategoryCreate {
            parent_id: self.parent_id,
            name: self.name.trim().to_string(),
            description: self.description,
            color: Some(self.color),
            icon: Some(self.icon),
            sort_order: Some(self.sort_order),
            auto_assign_to: self.auto_assign_to,
            sla_response_hours: Some(self.sla_response_hours),
            sla_resolution_hours: Some(self.sla_resolution_hours),
        }
    }

    /// Convert into the update payload for dispatch
    pub fn into_update(self) -> CategoryUpdate {
        CategoryUpdate {
            parent_id: self.parent_id,
            name: Some(self.name.trim().to_string()),
            description: self.description,
            color: Some(self.color),
            icon: Some(self.icon),
            sort_order: Some(self.sort_order),
            auto_assign_to: self.auto_assign_to,
            sla_response_hours: Some(self.sla_response_hours),
            sla_resolution_hours: Some(self.sla_resolution_hours),
            is_active: Some(self.is_active),
        }
    }
}

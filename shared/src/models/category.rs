//! Category Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed color palette for category display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryColor {
    #[default]
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Blue,
    Indigo,
    Purple,
    Pink,
}

/// Fixed icon set for category display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    #[default]
    Folder,
    Ticket,
    Server,
    Network,
    Printer,
    Shield,
    Mail,
    Phone,
    Database,
    Cloud,
    Wrench,
    Alert,
}

/// Category entity
///
/// A node in the ticket-classification hierarchy. Fetched flat from the
/// store; the tree is reconstructed client-side from `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    /// Parent category ID; absent means root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub color: CategoryColor,
    #[serde(default)]
    pub icon: CategoryIcon,
    #[serde(default)]
    pub sort_order: i32,
    /// Default SLA response timer (hours) inherited by tickets
    #[serde(default = "default_sla_response_hours")]
    pub sla_response_hours: u32,
    /// Default SLA resolution timer (hours), must be >= response hours
    #[serde(default = "default_sla_resolution_hours")]
    pub sla_resolution_hours: u32,
    /// Technician ID for auto-assignment (resolved externally)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_assign_to: Option<String>,
    /// Inactive categories stay in the tree for historical reporting but
    /// are excluded from assignment pickers
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Ticket count aggregate supplied by the store
    #[serde(default)]
    pub ticket_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_sla_response_hours() -> u32 {
    24
}

fn default_sla_resolution_hours() -> u32 {
    72
}

fn default_true() -> bool {
    true
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CategoryColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<CategoryIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_assign_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla_response_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla_resolution_hours: Option<u32>,
}

/// Update category payload (partial update, all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CategoryColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<CategoryIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_assign_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla_response_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla_resolution_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Move/reparent payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryMove {
    /// New parent ID; `None` moves the category to root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_sort_order: Option<i32>,
}

/// One sibling sort-order reassignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiblingOrder {
    pub category_id: String,
    pub sort_order: i32,
}

/// Batch sort-order update payload, applied atomically by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub sibling_orders: Vec<SiblingOrder>,
}

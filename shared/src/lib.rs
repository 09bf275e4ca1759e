//! Shared types for the Perch helpdesk admin application
//!
//! Domain models, the category hierarchy engine, error types, and
//! response structures used by the store client and UI layers.

pub mod category;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Hierarchy engine re-exports (for convenient access)
pub use category::{CategoryTree, ExpansionState, FlatCategory};
pub use category::{filter_by_search, would_create_circular_reference};

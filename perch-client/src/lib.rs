//! Perch Client - HTTP client for the helpdesk store
//!
//! Network-based calls to the store's category API, plus the
//! [`CategoryService`] that gates every mutation through the hierarchy
//! engine before dispatch.

pub mod categories;
pub mod config;
pub mod error;
pub mod http;

pub use categories::{CategoryService, CategoryStore, ServiceError, ServiceResult};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::category::{CategoryForm, CategoryTree, ExpansionState, FlatCategory};
pub use shared::models::{Category, CategoryCreate, CategoryMove, CategoryUpdate, ReorderRequest};

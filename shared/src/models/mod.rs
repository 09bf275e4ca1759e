//! Data models
//!
//! Shared between the store client and frontend (via API).
//! All IDs are `String` (store-assigned, immutable once created).

pub mod category;

// Re-exports
pub use category::*;

//! Error types for the engine and store boundary

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Application error with structured error code and details
///
/// The primary error type shared across Perch crates, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a circular reference error, attributed to the parent field
    pub fn circular_reference(category_id: impl Into<String>) -> Self {
        Self::new(ErrorCode::CircularReference)
            .with_detail("field", "parent_id")
            .with_detail("category_id", category_id.into())
    }

    /// Create a self-parent error, attributed to the parent field
    pub fn self_parent(category_id: impl Into<String>) -> Self {
        Self::new(ErrorCode::SelfParent)
            .with_detail("field", "parent_id")
            .with_detail("category_id", category_id.into())
    }

    /// Create a parent-not-found error
    pub fn parent_not_found(parent_id: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParentNotFound).with_detail("parent_id", parent_id.into())
    }

    /// Create a store unavailable error
    pub fn store_unavailable(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::StoreUnavailable, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Field-level validation failures, reported together
///
/// Maps field name to a human-readable message so the UI can highlight each
/// offending field independently. Ordered (BTreeMap) so error output is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field, replacing any earlier message
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    /// Get the message for a field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Whether any field failed
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failed fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over (field, message) pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

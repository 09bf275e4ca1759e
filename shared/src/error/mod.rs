//! Unified error system for the Perch admin application
//!
//! - [`ErrorCode`]: Standardized error codes shared with the store API
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ValidationErrors`]: Field-level failures collected for form display
//!
//! # Error Code Ranges
//!
//! - 0xxx: General / validation errors
//! - 1xxx: Hierarchy (structural) errors
//! - 2xxx: Store / access errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ValidationErrors};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! // Create an error with custom message
//! let err = AppError::with_message(ErrorCode::ValidationFailed, "Name is required");
//!
//! // Collect field failures for a form
//! let mut errors = ValidationErrors::new();
//! errors.insert("name", "Name is required");
//! assert!(errors.into_result().is_err());
//! ```

mod codes;
mod types;

pub use codes::{ErrorCategory, ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ValidationErrors};

//! Unified error codes for the Perch admin application
//!
//! Error codes are shared between the store API and the client so failures
//! survive serialization intact. Codes are organized by range:
//! - 0xxx: General / validation errors
//! - 1xxx: Hierarchy (structural) errors
//! - 2xxx: Store / access errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,
    /// Value out of range
    ValueOutOfRange = 7,

    // ==================== 1xxx: Hierarchy ====================
    /// Move would create a circular parent reference
    CircularReference = 1001,
    /// Category cannot be its own parent
    SelfParent = 1002,
    /// Referenced parent category does not exist
    ParentNotFound = 1003,
    /// Category still has descendants
    HasDescendants = 1004,

    // ==================== 2xxx: Store ====================
    /// Caller is not authenticated with the store
    NotAuthenticated = 2001,
    /// Store rejected the operation for this caller
    PermissionDenied = 2002,
    /// Store is unreachable or returned a malformed response
    StoreUnavailable = 2003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Request timed out
    Timeout = 9002,
}

/// Error returned when converting an unknown u16 to an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",
            Self::CircularReference => "Move would create a circular reference",
            Self::SelfParent => "Category cannot be its own parent",
            Self::ParentNotFound => "Parent category not found",
            Self::HasDescendants => "Category still has child categories",
            Self::NotAuthenticated => "Not authenticated",
            Self::PermissionDenied => "Permission denied",
            Self::StoreUnavailable => "Store unavailable",
            Self::InternalError => "Internal server error",
            Self::Timeout => "Request timed out",
        }
    }

    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::RequiredField),
            7 => Ok(Self::ValueOutOfRange),
            1001 => Ok(Self::CircularReference),
            1002 => Ok(Self::SelfParent),
            1003 => Ok(Self::ParentNotFound),
            1004 => Ok(Self::HasDescendants),
            2001 => Ok(Self::NotAuthenticated),
            2002 => Ok(Self::PermissionDenied),
            2003 => Ok(Self::StoreUnavailable),
            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::Timeout),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

/// Error category classification based on error code ranges
///
/// Categories are determined by the error code range:
/// - 0xxx: General errors
/// - 1xxx: Hierarchy errors
/// - 2xxx: Store errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Hierarchy errors (1xxx)
    Hierarchy,
    /// Store errors (2xxx)
    Store,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Hierarchy,
            2000..3000 => Self::Store,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Hierarchy => "hierarchy",
            Self::Store => "store",
            Self::System => "system",
        }
    }
}

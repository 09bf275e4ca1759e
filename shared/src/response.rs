//! API Response types
//!
//! Standardized response envelope used by the helpdesk store API

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// All store responses follow this format:
/// ```json
/// {
///     "code": 0,
///     "message": "OK",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error code)
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Request trace ID for debugging (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: ErrorCode::Success.code(),
            message: "OK".to_string(),
            data: Some(data),
            trace_id: None,
        }
    }

    /// Create an error response
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
            trace_id: None,
        }
    }

    /// Whether the store reported success
    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success.code()
    }

    /// Extract the payload, converting a store-reported error into [`AppError`].
    ///
    /// A success envelope without its data payload is a malformed store
    /// response, not a client fault.
    pub fn into_data(self) -> Result<T, AppError> {
        if !self.is_success() {
            let code = ErrorCode::try_from(self.code).unwrap_or(ErrorCode::Unknown);
            return Err(AppError::with_message(code, self.message));
        }
        self.data
            .ok_or_else(|| AppError::store_unavailable("Response missing data payload"))
    }
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message,
            data: None,
            trace_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response() {
        let response = ApiResponse::ok(42);
        assert!(response.is_success());
        assert_eq!(response.into_data().unwrap(), 42);
    }

    #[test]
    fn test_error_response_into_data() {
        let response: ApiResponse<i32> =
            ApiResponse::error(ErrorCode::CircularReference, "Would create a cycle");
        let err = response.into_data().unwrap_err();
        assert_eq!(err.code, ErrorCode::CircularReference);
        assert_eq!(err.message, "Would create a cycle");
    }

    #[test]
    fn test_success_without_data_is_store_unavailable() {
        let response: ApiResponse<i32> = ApiResponse {
            code: 0,
            message: "OK".to_string(),
            data: None,
            trace_id: None,
        };
        assert_eq!(
            response.into_data().unwrap_err().code,
            ErrorCode::StoreUnavailable
        );
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let response: ApiResponse<()> = ApiResponse::error(ErrorCode::NotFound, "Missing");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"code":3,"message":"Missing"}"#);
    }

    #[test]
    fn test_deserialize_envelope() {
        let json = r#"{"code":0,"message":"OK","data":[1,2,3],"trace_id":"t-1"}"#;
        let response: ApiResponse<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert_eq!(response.trace_id.as_deref(), Some("t-1"));
        assert_eq!(response.data.unwrap(), vec![1, 2, 3]);
    }
}

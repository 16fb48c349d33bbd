//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Shipment API                       │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  POST /api/shipment                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON? ───────── JsonRejection ──────────────── 400 ────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Rejected? ───────── ServiceError::Core ─────────── 400 ────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store failed? ───── ServiceError::Store ────── 404 / 500 ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shipment_core::{ServiceError, StoreError};

/// Error body returned by every failing endpoint.
///
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "invalid request: uncorrect name"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body is not a well-formed shipment request (400)
    InvalidBody,

    /// Path id is not a shipment id (400)
    InvalidId,

    /// A field failed validation (400)
    ValidationError,

    /// Resource not found (404)
    NotFound,

    /// Database operation failed (500)
    DatabaseError,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::InvalidBody | ErrorCode::InvalidId | ErrorCode::ValidationError => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_id(raw: &str) -> Self {
        ApiError::new(ErrorCode::InvalidId, format!("invalid shipment id: '{raw}'"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts service errors to API errors.
///
/// Backend details are logged, never sent to the client.
impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(e) => ApiError::validation(e.to_string()),
            ServiceError::Store(e @ StoreError::NotFound { .. }) => {
                ApiError::new(ErrorCode::NotFound, e.to_string())
            }
            ServiceError::Store(StoreError::Backend(e)) => {
                tracing::error!("Shipment store failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(ErrorCode::InvalidBody, rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use shipment_core::{CoreError, RequestField, ShipmentId};

    use super::*;

    #[rstest]
    #[case(ErrorCode::InvalidBody, StatusCode::BAD_REQUEST)]
    #[case(ErrorCode::InvalidId, StatusCode::BAD_REQUEST)]
    #[case(ErrorCode::ValidationError, StatusCode::BAD_REQUEST)]
    #[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
    #[case(ErrorCode::DatabaseError, StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_status_codes(#[case] code: ErrorCode, #[case] status: StatusCode) {
        assert_eq!(code.status(), status);
    }

    #[test]
    fn test_codes_serialize_screaming_snake() {
        let json = serde_json::to_value(ApiError::invalid_id("abc")).unwrap();
        assert_eq!(json["code"], "INVALID_ID");
        assert_eq!(json["message"], "invalid shipment id: 'abc'");
    }

    #[test]
    fn test_service_error_mapping() {
        let err: ApiError = ServiceError::Core(CoreError::invalid(RequestField::Weight)).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "invalid request: uncorrect weight");

        let err: ApiError = ServiceError::Store(StoreError::NotFound { id: ShipmentId(7) }).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "shipment not found: 7");

        let err: ApiError =
            ServiceError::Store(StoreError::Backend("disk I/O error".to_string())).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(!err.message.contains("disk"));
    }
}

//! # API Response Types
//!
//! Generic API response types providing a consistent error format for all
//! endpoints.
//!
//! ## Response Format
//!
//! ```json
//! {
//!   "success": false,
//!   "error": { "code": "NOT_FOUND", "message": "..." }
//! }
//! ```

use axum::{body::Body, response::Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Error payload carried by failed responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub code:    String,
    /// Human-readable message.
    pub message: String,
}

/// Generic API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success {
        success: bool,
        data:    T,
    },
    Error {
        success: bool,
        error:   ErrorBody,
    },
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn success(data: T) -> Self {
        Self::Success {
            success: true,
            data,
        }
    }

    /// Create an error response.
    pub fn error(code: impl ToString, message: impl ToString) -> Self {
        Self::Error {
            success: false,
            error:   ErrorBody {
                code:    code.to_string(),
                message: message.to_string(),
            },
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ApiResponse::<()>::error(self.code(), self.message());

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(
                serde_json::to_string(&body).unwrap_or_default(),
            ))
            .unwrap_or_else(|_| Response::new(Body::empty()))
    }
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn test_error_response_shape() {
        let response = ApiResponse::<()>::error("NOT_FOUND", "Member not found");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
    }

    #[test]
    fn test_success_response_shape() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("[1,2,3]"));
    }

    #[test]
    fn test_app_error_into_response_status() {
        let response = AppError::not_found("Member not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::database("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! # Error Crate Tests
//!
//! Tests for error types, responses, and conversions.

mod error_type_tests {
    use error::AppError;

    #[test]
    fn test_error_creation() {
        let error = AppError::not_found("Member not found");
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn test_error_message() {
        let error = AppError::bad_request("Invalid page size");
        let msg = format!("{}", error);
        assert!(msg.contains("Invalid page size"));
    }

    #[test]
    fn test_db_err_conversion() {
        let db_err = sea_orm::DbErr::Custom("connection reset".to_string());
        let error: AppError = db_err.into();
        assert!(matches!(error, AppError::Database { .. }));
        assert!(error.message().contains("connection reset"));
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(AppError::not_found("x").code(), "NOT_FOUND");
        assert_eq!(AppError::validation("x").code(), "VALIDATION_ERROR");
        assert_eq!(AppError::internal("x").code(), "INTERNAL_ERROR");
        assert_eq!(AppError::config("x").code(), "CONFIG_ERROR");
    }
}

mod api_response_tests {
    use error::ApiResponse;
    use serde_json::json;

    #[test]
    fn test_api_response_success_with_data() {
        let data = json!({"memberId": 1, "username": "memberA"});
        let response = ApiResponse::success(data);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["username"], "memberA");
    }

    #[test]
    fn test_api_response_error_shape() {
        let response = ApiResponse::<()>::error("DATABASE_ERROR", "count query failed");

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "DATABASE_ERROR");
        assert_eq!(value["error"]["message"], "count query failed");
    }
}

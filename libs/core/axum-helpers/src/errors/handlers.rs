use axum::response::{IntoResponse, Response};

use super::{ErrorCode, ErrorResponse};

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    ErrorResponse::new(
        ErrorCode::NotFound,
        "The requested resource was not found",
    )
    .into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    ErrorResponse::from_code(ErrorCode::MethodNotAllowed).into_response()
}

//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

/// Extractor for UUID path parameters.
///
/// Answers 400 `INVALID_UUID` instead of axum's plain-text rejection.
///
/// ```ignore
/// async fn get_assessment(UuidPath(id): UuidPath) -> String {
///     format!("Assessment ID: {}", id)
/// }
///
/// let app = Router::new().route("/assessment/{id}", get(get_assessment));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        Ok(UuidPath(Uuid::parse_str(&id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    async fn handler(UuidPath(id): UuidPath) -> String {
        id.to_string()
    }

    async fn get_status(uri: &str) -> StatusCode {
        let app = Router::new().route("/items/{id}", get(handler));
        let request = Request::get(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_valid_uuid() {
        let uri = format!("/items/{}", Uuid::now_v7());
        assert_eq!(get_status(&uri).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_uuid_is_bad_request() {
        assert_eq!(get_status("/items/not-a-uuid").await, StatusCode::BAD_REQUEST);
    }
}

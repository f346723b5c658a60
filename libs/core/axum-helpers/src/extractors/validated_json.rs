//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Both failure modes answer 400 with the standard error body:
/// - body rejections (bad syntax, unknown enum value, missing field, wrong
///   content type) as `INVALID_JSON`
/// - `Validate` failures as `VALIDATION_ERROR` with per-field details
///
/// ```ignore
/// async fn assess(ValidatedJson(requirements): ValidatedJson<Requirements>) -> Response {
///     // requirements has passed `Validate::validate`
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode, header},
        routing::post,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(range(min = 0.0))]
        amount: f64,
    }

    async fn handler(ValidatedJson(payload): ValidatedJson<Payload>) -> String {
        payload.amount.to_string()
    }

    async fn post_json(body: &str) -> StatusCode {
        let app = Router::new().route("/", post(handler));
        let request = HttpRequest::post("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        assert_eq!(post_json(r#"{"amount": 2.5}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejections_are_bad_request() {
        assert_eq!(post_json("{not json").await, StatusCode::BAD_REQUEST);
        assert_eq!(post_json(r#"{}"#).await, StatusCode::BAD_REQUEST);
        assert_eq!(
            post_json(r#"{"amount": "lots"}"#).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_validation_failure_is_bad_request() {
        assert_eq!(post_json(r#"{"amount": -1}"#).await, StatusCode::BAD_REQUEST);
    }
}

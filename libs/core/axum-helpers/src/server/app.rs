use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{create_cors_layer, hsts_header, security_headers};
use axum::{Router, middleware};
use core_config::{Environment, server::ServerConfig};
use std::future::{Future, IntoFuture};
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Wraps the API routes with documentation and cross-cutting middleware.
///
/// This sets up:
/// - OpenAPI documentation: Swagger UI (`/swagger-ui`, spec at
///   `/api-docs/openapi.json`), ReDoc (`/redoc`), RapiDoc (`/rapidoc`) and
///   Scalar (`/scalar`)
/// - API routes nested under `/api`
/// - JSON 404 and 405 fallbacks
/// - Request tracing, security headers (plus HSTS in production), CORS from
///   `server_config.cors_allowed_origins`, response compression
///
/// Health and metrics endpoints are merged by the app afterwards.
///
/// # Errors
/// Returns `InvalidInput` if the configured CORS origins are empty or invalid.
///
/// ```ignore
/// let api_routes = Router::new().nest("/", domain::router(service));
/// let router = create_router::<ApiDoc>(api_routes, &config.server, &config.environment)?;
/// ```
pub fn create_router<T>(
    apis: Router,
    server_config: &ServerConfig,
    environment: &Environment,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(&server_config.cors_allowed_origins)?;
    info!(
        origins = ?server_config.cors_allowed_origins,
        "CORS configured"
    );

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if environment.use_https() {
        router = router.layer(middleware::from_fn(hsts_header));
    }

    Ok(router.layer(cors_layer).layer(CompressionLayer::new()))
}

/// Serves `router` until SIGINT/SIGTERM, then drains and cleans up.
///
/// After the signal, in-flight requests get `server_config.shutdown_timeout`
/// to finish before remaining connections are dropped. `cleanup` then runs
/// under the same timeout.
///
/// ```ignore
/// create_production_app(app, &config.server, async move {
///     info!("Flushing state");
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let shutdown_timeout = server_config.shutdown_timeout;
    let coordinator = ShutdownCoordinator::default();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_handle = coordinator.clone();
    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal_handle.wait_for_signal().await })
        .into_future();

    let drain_deadline = async move {
        let _ = shutdown_rx.recv().await;
        tokio::time::sleep(shutdown_timeout).await;
    };

    let serve_result = tokio::select! {
        result = server => result.inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        }),
        _ = drain_deadline => {
            warn!(
                "In-flight requests exceeded shutdown timeout of {:?}, dropping connections",
                shutdown_timeout
            );
            Ok(())
        }
    };

    info!("Running cleanup (timeout: {:?})", shutdown_timeout);
    if tokio::time::timeout(shutdown_timeout, cleanup).await.is_err() {
        warn!("Cleanup exceeded timeout of {:?}", shutdown_timeout);
    }

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    fn app(environment: Environment) -> Router {
        let apis = Router::new().route("/ping", get(|| async { "pong" }));
        create_router::<TestDoc>(apis, &ServerConfig::default(), &environment).unwrap()
    }

    async fn get_response(router: Router, uri: &str) -> axum::response::Response {
        router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_routes_are_nested_under_api() {
        let response = get_response(app(Environment::Development), "/api/ping").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get_response(app(Environment::Development), "/ping").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_spec_is_served() {
        let response = get_response(app(Environment::Development), "/api-docs/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_error() {
        let response = get_response(app(Environment::Development), "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_wrong_method_returns_405() {
        let response = app(Environment::Development)
            .oneshot(
                Request::post("/api/ping")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_hsts_only_in_production() {
        let response = get_response(app(Environment::Development), "/api/ping").await;
        assert!(!response.headers().contains_key(header::STRICT_TRANSPORT_SECURITY));

        let response = get_response(app(Environment::Production), "/api/ping").await;
        assert!(response.headers().contains_key(header::STRICT_TRANSPORT_SECURITY));
    }

    #[test]
    fn test_empty_cors_origins_fail() {
        let mut config = ServerConfig::default();
        config.cors_allowed_origins.clear();

        let result = create_router::<TestDoc>(Router::new(), &config, &Environment::Development);
        assert!(result.is_err());
    }
}

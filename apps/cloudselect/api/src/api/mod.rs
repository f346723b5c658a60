use axum::Router;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by `create_router`.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().merge(domain_recommendations::handlers::router(state.service.clone()))
}

/// Creates a router with the /ready endpoint backed by real checks.
///
/// Has its state applied, so it merges into the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

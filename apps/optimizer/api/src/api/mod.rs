use axum::Router;
use axum::routing::get;

pub mod info;
pub mod ready;

/// Creates the API routes.
///
/// The three operation paths are part of the public contract and carry no
/// prefix, so domain routers merge at the root rather than nesting.
/// Returns a stateless Router (all sub-routers have state already applied).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .merge(info::router())
        .merge(domain_snippets::handlers::router(state.snippets.clone()))
        .merge(domain_analysis::handlers::router(state.analysis.clone()))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(ready::ready_handler))
        .with_state(state)
}

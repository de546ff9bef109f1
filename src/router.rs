use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{health, project};
use crate::middleware::auth::jwt_auth_middleware;
use crate::state::AppState;

/// Build the application router.
///
/// Shared by the production binary and the integration tests so both exercise
/// the same middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/health", get(health::health))
        // Project routes, all behind the auth gate
        .merge(project_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn project_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/project", get(project::project_list))
        .route("/project/new", post(project::project_create))
        .route("/project/:project_id", get(project::project_get))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

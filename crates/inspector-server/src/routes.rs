use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/api/comparisons/",
            get(handlers::list_comparisons).post(handlers::create_comparison),
        )
        .route(
            "/api/comparisons",
            get(handlers::list_comparisons).post(handlers::create_comparison),
        )
        .route("/api/comparisons/{id}", get(handlers::get_comparison))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

//! API Router configuration

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the main API router
pub fn create_router(state: AppState, enable_cors: bool) -> Router {
    let api_routes = Router::new()
        // Health
        .route("/health", get(handlers::health_check))
        // Dashboard configuration and filter options
        .route("/config", get(handlers::dashboard_config))
        .route("/filters", get(handlers::filter_options))
        // The four reporting views in one evaluation
        .route("/dashboard", get(handlers::dashboard))
        // Measurement ingestion
        .route("/measurements", post(handlers::ingest_measurements))
        .route("/measurements/count", get(handlers::measurement_count));

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handlers, middleware::metrics_middleware, queues};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Queues
        .route("/queues", get(queues::list_queues))
        .route("/queues/{category}", get(queues::status))
        .route("/queues/{category}/tickets", post(queues::admit))
        .route("/queues/{category}/dispatch", post(queues::dispatch))
        .route(
            "/queues/{category}/counters/{counter}/complete",
            post(queues::complete),
        )
        .layer(middleware::from_fn(metrics_middleware));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

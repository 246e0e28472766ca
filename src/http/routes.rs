use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session lifecycle
        .route("/session/new", post(handlers::new_session))
        .route("/session/reset", post(handlers::reset_session))
        .route("/session/:session_id", get(handlers::get_session))
        // Interview flow
        .route("/audio/upload", post(handlers::upload_audio))
        .route("/podcast/generate", post(handlers::generate_podcast))
        // Request logging; the browser client calls from another origin
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

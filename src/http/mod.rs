//! HTTP API for the server-side interview variant
//!
//! This module provides a REST API over the session controller:
//! - POST /session/new - Create and seed an interview session
//! - POST /session/reset - Clear a session back to a fresh interview
//! - POST /audio/upload - Submit a recorded answer for transcription
//! - POST /podcast/generate - Assemble the podcast once all steps are in
//! - GET /session/:id - Inspect session status and message log
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

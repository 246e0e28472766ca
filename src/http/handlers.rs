use super::state::AppState;
use crate::error::SessionError;
use crate::podcast::{PodcastAssembler, PodcastResult};
use crate::session::{AudioRef, SessionController, SessionView, StepOutcome};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub status: String,
    /// The seeded welcome and first-prompt messages
    pub session: SessionView,
}

#[derive(Debug, Deserialize)]
pub struct UploadAudioRequest {
    pub session_id: String,

    /// Interview step this recording answers; must be the current step
    pub step_index: usize,

    /// Base64-encoded recorded audio
    pub audio_base64: String,

    /// Optional playback URL used for the assembled timeline
    pub playback_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadAudioResponse {
    pub session_id: String,
    pub step_index: usize,
    /// The resolved transcript for this step
    pub transcript: String,
    pub status: String,
    /// The next prompt, absent once all steps are answered
    pub next_prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratePodcastRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct GeneratePodcastResponse {
    pub podcast: PodcastResult,
}

#[derive(Debug, Deserialize)]
pub struct ResetSessionRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(err: &SessionError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        SessionError::OutOfOrderRecording { .. }
        | SessionError::RecordingInFlight(_)
        | SessionError::WrongState(_) => StatusCode::CONFLICT,
        SessionError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        SessionError::TranscriptionFailed(_) | SessionError::GenerationFailed(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn session_not_found(session_id: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Session {} not found", session_id),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /session/new
/// Create a new interview session, seeded with the welcome message and
/// the first prompt
pub async fn new_session(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = format!("session-{}", uuid::Uuid::new_v4());

    info!("Creating interview session: {}", session_id);

    let assembler = PodcastAssembler::new(
        state.tts.clone(),
        state.config.timeline.clone(),
        state.config.voice.clone(),
    );

    let mut controller = SessionController::new(
        session_id.clone(),
        state.config.interview.clone(),
        state.config.script.clone(),
        state.asr.clone(),
        assembler,
    );
    controller.start();

    let view = controller.view();
    let status = view.status.as_str().to_string();

    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(session_id.clone(), Arc::new(Mutex::new(controller)));
    }

    (
        StatusCode::OK,
        Json(NewSessionResponse {
            session_id,
            status,
            session: view,
        }),
    )
        .into_response()
}

/// POST /audio/upload
/// Submit a recorded answer for the current step; the transcript comes
/// back once the ASR collaborator resolves it
pub async fn upload_audio(
    State(state): State<AppState>,
    Json(req): Json<UploadAudioRequest>,
) -> impl IntoResponse {
    let audio_bytes = match base64::engine::general_purpose::STANDARD.decode(&req.audio_base64) {
        Ok(bytes) => bytes,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid base64 audio: {}", e),
                }),
            )
                .into_response();
        }
    };

    let controller = {
        let sessions = state.sessions.read().await;
        sessions.get(&req.session_id).cloned()
    };

    let Some(controller) = controller else {
        return session_not_found(&req.session_id).into_response();
    };

    let mut controller = controller.lock().await;

    let audio = AudioRef {
        bytes: audio_bytes,
        url: req.playback_url.clone(),
    };

    match controller.submit_recording(req.step_index, audio).await {
        Ok(outcome) => {
            let session = controller.session();
            let transcript = session
                .transcripts()
                .get(&req.step_index)
                .cloned()
                .unwrap_or_default();

            let next_prompt = match outcome {
                StepOutcome::NextPrompt { .. } => {
                    controller.current_prompt().map(|p| p.to_string())
                }
                StepOutcome::InterviewComplete => None,
            };

            (
                StatusCode::OK,
                Json(UploadAudioResponse {
                    session_id: req.session_id,
                    step_index: req.step_index,
                    transcript,
                    status: controller.session().status().as_str().to_string(),
                    next_prompt,
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Upload failed for session {}: {}", req.session_id, e);
            error_response(&e).into_response()
        }
    }
}

/// POST /podcast/generate
/// Assemble the podcast for a session whose interview is complete
pub async fn generate_podcast(
    State(state): State<AppState>,
    Json(req): Json<GeneratePodcastRequest>,
) -> impl IntoResponse {
    let controller = {
        let sessions = state.sessions.read().await;
        sessions.get(&req.session_id).cloned()
    };

    let Some(controller) = controller else {
        return session_not_found(&req.session_id).into_response();
    };

    let mut controller = controller.lock().await;

    match controller.generate().await {
        Ok(result) => {
            info!("Podcast generated for session {}", req.session_id);
            (
                StatusCode::OK,
                Json(GeneratePodcastResponse {
                    podcast: result.clone(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Generation failed for session {}: {}", req.session_id, e);
            error_response(&e).into_response()
        }
    }
}

/// POST /session/reset
/// Clear a session back to a fresh, re-seeded interview
pub async fn reset_session(
    State(state): State<AppState>,
    Json(req): Json<ResetSessionRequest>,
) -> impl IntoResponse {
    let controller = {
        let sessions = state.sessions.read().await;
        sessions.get(&req.session_id).cloned()
    };

    let Some(controller) = controller else {
        return session_not_found(&req.session_id).into_response();
    };

    let mut controller = controller.lock().await;
    controller.reset();
    controller.start();

    (StatusCode::OK, Json(controller.view())).into_response()
}

/// GET /session/:session_id
/// Inspect a session's status, current step, and message log
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let controller = {
        let sessions = state.sessions.read().await;
        sessions.get(&session_id).cloned()
    };

    match controller {
        Some(controller) => {
            let controller = controller.lock().await;
            (StatusCode::OK, Json(controller.view())).into_response()
        }
        None => session_not_found(&session_id).into_response(),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

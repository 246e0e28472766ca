//! Speech collaborator clients (ASR and TTS)
//!
//! This module provides the seam to the external speech services:
//! - `AsrService` / `TtsService` traits consumed by the session controller
//!   and the podcast assembler
//! - `MinimaxClient`, an HTTP implementation of both against the Minimax
//!   speech API (one ASR call per recorded step, one TTS call per
//!   narration line)

pub mod client;
pub mod messages;
pub mod service;

pub use client::{MinimaxClient, SpeechConfig};
pub use messages::{AsrRequest, AsrResponse, TtsApiRequest, TtsApiResponse};
pub use service::{AsrService, SpeechError, SynthesizedAudio, Transcription, TtsRequest, TtsService};

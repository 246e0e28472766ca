use async_trait::async_trait;
use thiserror::Error;

/// Result of a speech-to-text call
#[derive(Debug, Clone)]
pub struct Transcription {
    /// Transcribed text
    pub text: String,
}

/// A single text-to-speech request
///
/// One request is issued per narration line, in input order.
#[derive(Debug, Clone)]
pub struct TtsRequest {
    /// Text to synthesize
    pub text: String,
    /// Voice preset name (e.g. "male-qn-jingying")
    pub voice: String,
    /// Emotion hint (e.g. "calm", "neutral")
    pub emotion: String,
    /// Speech rate multiplier (1.0 = normal)
    pub speed: f64,
}

/// Synthesized audio returned by the TTS collaborator
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// Base64-encoded audio bytes (commonly MP3)
    pub audio_base64: String,
    /// Provider request id, if the service returned one
    pub request_id: Option<String>,
}

/// Errors from the external speech collaborators
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("speech service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("malformed response: {0}")]
    BadResponse(String),
}

/// Speech-to-text collaborator
///
/// Used once per recorded interview step. Implementations must impose
/// their own request timeout and surface it as `SpeechError::Timeout`.
#[async_trait]
pub trait AsrService: Send + Sync {
    /// Transcribe recorded audio bytes into text
    async fn transcribe(&self, audio: &[u8]) -> Result<Transcription, SpeechError>;
}

/// Text-to-speech collaborator
///
/// Used once per narration line during podcast assembly.
#[async_trait]
pub trait TtsService: Send + Sync {
    /// Synthesize narration audio for a single line of text
    async fn synthesize(&self, request: &TtsRequest) -> Result<SynthesizedAudio, SpeechError>;
}

use crate::session::SessionStatus;
use thiserror::Error;

/// Errors surfaced by the session controller and podcast assembler
#[derive(Debug, Error)]
pub enum SessionError {
    /// A recording was submitted for a step other than the current one.
    /// The session is left unmodified; this is a caller error.
    #[error("recording submitted for step {submitted}, but the interview is at step {current}")]
    OutOfOrderRecording { submitted: usize, current: usize },

    /// A recording for the current step is still being transcribed.
    /// Retry once the pending recording resolves or fails.
    #[error("a recording for step {0} is still being transcribed")]
    RecordingInFlight(usize),

    /// The ASR collaborator failed or timed out. The session stays in
    /// `collecting` at the same step so the recording can be retried.
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),

    /// TTS or timeline assembly failed or timed out. Terminal: the session
    /// moves to `failed` and must be reset by the caller.
    #[error("podcast generation failed: {0}")]
    GenerationFailed(String),

    /// Missing or malformed input (empty audio, unknown message id, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The operation is not valid in the session's current status.
    #[error("operation not allowed while session is {0}")]
    WrongState(SessionStatus),
}

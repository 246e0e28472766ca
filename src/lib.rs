pub mod config;
pub mod error;
pub mod http;
pub mod podcast;
pub mod session;
pub mod speech;

pub use config::Config;
pub use error::SessionError;
pub use http::{create_router, AppState};
pub use podcast::{
    AudioPayload, EntryKind, NarrationLine, NarrationScript, NarrationVoice, PodcastAssembler,
    PodcastResult, TimelineConfig, TimelineEntry,
};
pub use session::{
    AudioRef, InterviewConfig, Message, MessageRole, Session, SessionController, SessionStatus,
    SessionView, StepOutcome, StepPrompt,
};
pub use speech::{
    AsrService, MinimaxClient, SpeechConfig, SpeechError, SynthesizedAudio, Transcription,
    TtsRequest, TtsService,
};

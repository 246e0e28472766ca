use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Interview lifecycle status
///
/// `collecting` → `generating` → `ready` | `failed`. The only way out of
/// `ready` or `failed` is an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Recording answers, one step at a time
    Collecting,
    /// All steps answered; podcast assembly may run
    Generating,
    /// Podcast assembled successfully
    Ready,
    /// A collaborator call failed during generation
    Failed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Collecting => "collecting",
            SessionStatus::Generating => "generating",
            SessionStatus::Ready => "ready",
            SessionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who authored a chat-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One chat-log entry
///
/// Immutable once created, except for placeholder resolution: a
/// "transcribing" entry is replaced in place by id once the ASR
/// collaborator returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique id in creation order
    pub id: u64,

    pub role: MessageRole,

    pub text: String,

    /// Playback URL for recorded answers, if one was provided
    pub audio_url: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// A recorded answer: raw bytes for the ASR collaborator plus an optional
/// playback URL used as the timeline payload.
#[derive(Debug, Clone)]
pub struct AudioRef {
    pub bytes: Vec<u8>,
    pub url: Option<String>,
}

/// Live interview state
///
/// Owned exclusively by the `SessionController`; everything outside the
/// controller reads it through shared references.
#[derive(Debug)]
pub struct Session {
    id: String,
    status: SessionStatus,
    current_step: usize,
    messages: Vec<Message>,
    transcripts: BTreeMap<usize, String>,
    audio_refs: BTreeMap<usize, AudioRef>,
    started_at: DateTime<Utc>,
    next_message_id: u64,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: SessionStatus::Collecting,
            current_step: 0,
            messages: Vec::new(),
            transcripts: BTreeMap::new(),
            audio_refs: BTreeMap::new(),
            started_at: Utc::now(),
            next_message_id: 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The message log, insertion order = display order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Transcribed answers, keyed by step index
    pub fn transcripts(&self) -> &BTreeMap<usize, String> {
        &self.transcripts
    }

    /// Recorded audio, keyed by step index
    pub fn audio_refs(&self) -> &BTreeMap<usize, AudioRef> {
        &self.audio_refs
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append a message and return its id
    pub(crate) fn push_message(
        &mut self,
        role: MessageRole,
        text: String,
        audio_url: Option<String>,
    ) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.messages.push(Message {
            id,
            role,
            text,
            audio_url,
            created_at: Utc::now(),
        });
        id
    }

    /// Replace a message's text in place by id. Returns false if no
    /// message with that id exists.
    pub(crate) fn resolve_message(&mut self, id: u64, text: String) -> bool {
        match self.messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.text = text;
                true
            }
            None => false,
        }
    }

    /// Store a resolved answer for a step
    pub(crate) fn record_answer(&mut self, step: usize, transcript: String, audio: AudioRef) {
        self.transcripts.insert(step, transcript);
        self.audio_refs.insert(step, audio);
    }

    pub(crate) fn set_current_step(&mut self, step: usize) {
        self.current_step = step;
    }

    pub(crate) fn set_status(&mut self, status: SessionStatus) {
        self.status = status;
    }
}

use serde::{Deserialize, Serialize};

/// Kind of a playable timeline segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    IntroMusic,
    Narration,
    UserClip,
    OutroMusic,
}

/// Audio payload of a timeline entry: inline base64 data, or a URL the
/// player fetches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AudioPayload {
    Inline { audio_base64: String },
    Reference { url: String },
}

/// One item in the assembled playback sequence
///
/// Entries are emitted back to back: each entry starts where the previous
/// one ends, with no overlap and no gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,

    #[serde(flatten)]
    pub payload: AudioPayload,

    /// Offset from the start of the podcast, in seconds
    pub start_time: f64,

    /// Segment length in seconds
    pub duration: f64,
}

/// Segment durations and bumper references used by the assembler
///
/// Durations are configured constants; they are not measured from the
/// audio itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub intro_duration: f64,
    pub narration_duration: f64,
    pub clip_duration: f64,
    pub outro_duration: f64,

    /// Bumper music references placed at the timeline edges
    pub intro_url: String,
    pub outro_url: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            intro_duration: 3.0,
            narration_duration: 4.0,
            clip_duration: 4.0,
            outro_duration: 3.0,
            intro_url: "/api/audio/intro-music".to_string(),
            outro_url: "/api/audio/outro-music".to_string(),
        }
    }
}

/// Output of podcast generation; immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodcastResult {
    pub title: String,

    /// Human-readable script alternating narration and user-quote blocks
    pub script: String,

    pub timeline: Vec<TimelineEntry>,

    /// Last entry's start time plus its duration
    #[serde(rename = "duration")]
    pub total_duration: f64,

    pub narration_count: usize,

    pub user_clip_count: usize,
}

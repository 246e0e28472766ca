use super::script::{render_script, NarrationScript};
use super::timeline::{AudioPayload, EntryKind, PodcastResult, TimelineConfig, TimelineEntry};
use crate::error::SessionError;
use crate::session::AudioRef;
use crate::speech::{TtsRequest, TtsService};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info};

/// Narration voice parameters applied to every synthesized line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationVoice {
    /// Voice preset name
    pub voice: String,

    /// Emotion hint
    pub emotion: String,

    /// Speech rate; slightly below 1.0 for a podcast feel
    pub speed: f64,
}

impl Default for NarrationVoice {
    fn default() -> Self {
        Self {
            voice: "male-qn-jingying".to_string(),
            emotion: "calm".to_string(),
            speed: 0.95,
        }
    }
}

/// Builds the playback timeline and script text from narration lines and
/// the collected user recordings.
///
/// Narration audio is synthesized one line at a time, in input order; the
/// first failed synthesis aborts assembly and no partial result is
/// returned.
pub struct PodcastAssembler {
    tts: Arc<dyn TtsService>,
    config: TimelineConfig,
    voice: NarrationVoice,
}

impl PodcastAssembler {
    pub fn new(tts: Arc<dyn TtsService>, config: TimelineConfig, voice: NarrationVoice) -> Self {
        Self { tts, config, voice }
    }

    /// Assemble the podcast.
    ///
    /// Walks the narration lines once, keeping a cursor of accumulated
    /// seconds: intro, then per line a narration entry and (when that step
    /// has a recording) a user clip, then outro. Consecutive entries are
    /// contiguous: each starts where the previous one ends.
    pub async fn assemble(
        &self,
        script: &NarrationScript,
        user_audio: &BTreeMap<usize, AudioRef>,
        transcripts: &BTreeMap<usize, String>,
    ) -> Result<PodcastResult, SessionError> {
        if script.lines.is_empty() {
            return Err(SessionError::InvalidInput(
                "narration script has no lines".to_string(),
            ));
        }

        info!(
            "Assembling podcast \"{}\": {} narration lines, {} user clips",
            script.title,
            script.lines.len(),
            user_audio.len()
        );

        let mut timeline = Vec::with_capacity(script.lines.len() * 2 + 2);

        timeline.push(TimelineEntry {
            kind: EntryKind::IntroMusic,
            payload: AudioPayload::Reference {
                url: self.config.intro_url.clone(),
            },
            start_time: 0.0,
            duration: self.config.intro_duration,
        });

        let mut cursor = self.config.intro_duration;

        for (index, line) in script.lines.iter().enumerate() {
            let request = TtsRequest {
                text: line.text.clone(),
                voice: self.voice.voice.clone(),
                emotion: self.voice.emotion.clone(),
                speed: self.voice.speed,
            };

            let audio = self.tts.synthesize(&request).await.map_err(|err| {
                error!("Narration synthesis failed at line {}: {}", index, err);
                SessionError::GenerationFailed(err.to_string())
            })?;

            timeline.push(TimelineEntry {
                kind: EntryKind::Narration,
                payload: AudioPayload::Inline {
                    audio_base64: audio.audio_base64,
                },
                start_time: cursor,
                duration: self.config.narration_duration,
            });
            cursor += self.config.narration_duration;

            if let Some(clip) = user_audio.get(&index) {
                timeline.push(TimelineEntry {
                    kind: EntryKind::UserClip,
                    payload: clip_payload(clip),
                    start_time: cursor,
                    duration: self.config.clip_duration,
                });
                cursor += self.config.clip_duration;
            }
        }

        timeline.push(TimelineEntry {
            kind: EntryKind::OutroMusic,
            payload: AudioPayload::Reference {
                url: self.config.outro_url.clone(),
            },
            start_time: cursor,
            duration: self.config.outro_duration,
        });

        let total_duration = cursor + self.config.outro_duration;
        let user_clip_count = timeline
            .iter()
            .filter(|entry| entry.kind == EntryKind::UserClip)
            .count();

        info!(
            "Podcast assembled: {} entries, {:.1}s total",
            timeline.len(),
            total_duration
        );

        Ok(PodcastResult {
            title: script.title.clone(),
            script: render_script(script, transcripts),
            timeline,
            total_duration,
            narration_count: script.lines.len(),
            user_clip_count,
        })
    }
}

/// User clips play from their upload URL when one exists; otherwise the
/// recorded bytes are inlined.
fn clip_payload(clip: &AudioRef) -> AudioPayload {
    match &clip.url {
        Some(url) => AudioPayload::Reference { url: url.clone() },
        None => AudioPayload::Inline {
            audio_base64: base64::engine::general_purpose::STANDARD.encode(&clip.bytes),
        },
    }
}

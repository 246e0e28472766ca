use serde::{Deserialize, Serialize};

/// ASR request body sent to the speech service
#[derive(Debug, Serialize, Deserialize)]
pub struct AsrRequest {
    /// Base64-encoded audio bytes
    pub audio: String,
    pub model: String,
}

/// ASR response body
#[derive(Debug, Serialize, Deserialize)]
pub struct AsrResponse {
    pub text: String,
}

/// TTS request body sent to the speech service
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsApiRequest {
    pub model: String,
    pub text: String,
    pub voice_id: String,
    pub speed: f64,
    pub audio_setting: AudioSetting,
}

/// Output audio parameters for TTS
#[derive(Debug, Serialize, Deserialize)]
pub struct AudioSetting {
    pub sample_rate: u32,
    pub bitrate: u32,
    pub format: String,
}

impl Default for AudioSetting {
    fn default() -> Self {
        Self {
            sample_rate: 32000,
            bitrate: 128_000,
            format: "mp3".to_string(),
        }
    }
}

/// TTS response body
///
/// The service returns the audio either at the top level (`audio`) or
/// nested under `data.audio`, depending on the endpoint revision.
#[derive(Debug, Deserialize)]
pub struct TtsApiResponse {
    pub audio: Option<String>,
    pub data: Option<TtsAudioData>,
    pub request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TtsAudioData {
    pub audio: Option<String>,
}

impl TtsApiResponse {
    /// Extract the base64 audio from whichever field the service used
    pub fn into_audio(self) -> Option<(String, Option<String>)> {
        let request_id = self.request_id;
        if let Some(audio) = self.audio {
            return Some((audio, request_id));
        }
        if let Some(data) = self.data {
            if let Some(audio) = data.audio {
                return Some((audio, request_id));
            }
        }
        None
    }
}

/// Map a voice preset name to the provider's speaker id
///
/// Unknown presets fall back to the elite male voice.
pub fn map_voice(voice: &str) -> &'static str {
    match voice {
        "male-qn-qingse" => "speaker-1",
        "male-qn-jingying" => "speaker-2",
        "male-qn-badao" => "speaker-3",
        "female-qn-jingying" => "speaker-4",
        "female-qn-mane" => "speaker-5",
        _ => "speaker-2",
    }
}

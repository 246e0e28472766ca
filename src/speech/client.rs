use super::messages::{self, AsrRequest, AsrResponse, AudioSetting, TtsApiRequest, TtsApiResponse};
use super::service::{AsrService, SpeechError, SynthesizedAudio, Transcription, TtsRequest, TtsService};
use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Configuration for the Minimax speech client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// API base URL
    pub base_url: String,

    /// Bearer token for the speech service
    pub api_key: String,

    /// Group id sent as the `X-GroupId` header
    pub group_id: String,

    /// Request timeout in seconds for both ASR and TTS calls
    pub timeout_secs: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.minimax.chat".to_string(),
            api_key: String::new(),
            group_id: "default".to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the Minimax speech API, implementing both the ASR and
/// TTS collaborator traits
pub struct MinimaxClient {
    http: reqwest::Client,
    config: SpeechConfig,
}

impl MinimaxClient {
    pub fn new(config: SpeechConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        info!("Speech client configured for {}", config.base_url);

        Ok(Self { http, config })
    }

    fn map_transport(err: reqwest::Error) -> SpeechError {
        if err.is_timeout() {
            SpeechError::Timeout
        } else {
            SpeechError::Network(err.to_string())
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SpeechError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(SpeechError::Service {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl AsrService for MinimaxClient {
    async fn transcribe(&self, audio: &[u8]) -> Result<Transcription, SpeechError> {
        let body = AsrRequest {
            audio: base64::engine::general_purpose::STANDARD.encode(audio),
            model: "whisper-1".to_string(),
        };

        let response = self
            .http
            .post(format!("{}/v1/asr", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .header("X-GroupId", &self.config.group_id)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport)?;

        let response = Self::check_status(response).await?;

        let parsed: AsrResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::BadResponse(e.to_string()))?;

        info!("Transcribed {} bytes of audio", audio.len());

        Ok(Transcription { text: parsed.text })
    }
}

#[async_trait]
impl TtsService for MinimaxClient {
    async fn synthesize(&self, request: &TtsRequest) -> Result<SynthesizedAudio, SpeechError> {
        // The emotion hint selects presentation-side defaults only; the
        // speech-01 endpoint takes voice_id and speed.
        let body = TtsApiRequest {
            model: "speech-01".to_string(),
            text: request.text.clone(),
            voice_id: messages::map_voice(&request.voice).to_string(),
            speed: request.speed,
            audio_setting: AudioSetting::default(),
        };

        let response = self
            .http
            .post(format!("{}/v1/tts", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .header("X-GroupId", &self.config.group_id)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport)?;

        let response = Self::check_status(response).await?;

        let parsed: TtsApiResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::BadResponse(e.to_string()))?;

        let (audio_base64, request_id) = parsed
            .into_audio()
            .ok_or_else(|| SpeechError::BadResponse("no audio data in response".to_string()))?;

        info!(
            "Synthesized narration audio ({} chars of text)",
            request.text.chars().count()
        );

        Ok(SynthesizedAudio {
            audio_base64,
            request_id,
        })
    }
}

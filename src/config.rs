use crate::podcast::{NarrationScript, NarrationVoice, TimelineConfig};
use crate::session::InterviewConfig;
use crate::speech::SpeechConfig;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,

    #[serde(default)]
    pub speech: SpeechConfig,

    #[serde(default)]
    pub interview: InterviewConfig,

    #[serde(default)]
    pub timeline: TimelineConfig,

    #[serde(default)]
    pub voice: NarrationVoice,

    #[serde(default)]
    pub script: NarrationScript,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from a file, with `STORYCAST__*` environment
    /// variables overriding file values (e.g. `STORYCAST__SPEECH__API_KEY`).
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("STORYCAST").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

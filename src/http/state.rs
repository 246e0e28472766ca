use crate::config::Config;
use crate::session::SessionController;
use crate::speech::{AsrService, TtsService};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Active interview sessions (session_id → controller). Each
    /// controller has its own mutex, so events for one session are
    /// processed strictly one at a time while sessions stay independent.
    pub sessions: Arc<RwLock<HashMap<String, Arc<Mutex<SessionController>>>>>,

    pub config: Arc<Config>,

    /// Speech collaborators handed to every new controller
    pub asr: Arc<dyn AsrService>,
    pub tts: Arc<dyn TtsService>,
}

impl AppState {
    pub fn new(config: Config, asr: Arc<dyn AsrService>, tts: Arc<dyn TtsService>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config: Arc::new(config),
            asr,
            tts,
        }
    }
}

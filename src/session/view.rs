use super::session::{Message, SessionStatus};
use serde::Serialize;

/// Read-only snapshot of an interview session, for API responses and
/// UI observers
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: String,

    pub status: SessionStatus,

    /// Index of the step currently being collected
    pub current_step: usize,

    /// Total number of interview steps
    pub steps_total: usize,

    /// The full message log in display order
    pub messages: Vec<Message>,
}

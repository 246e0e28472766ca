//! Guided interview session management
//!
//! This module provides the `SessionController` abstraction that manages:
//! - The fixed sequence of interview prompts
//! - The append-only chat-style message log
//! - Per-step transcript capture via the ASR collaborator
//! - The transition into podcast generation once all steps are answered

mod config;
mod controller;
mod session;
mod view;

pub use config::{InterviewConfig, StepPrompt};
pub use controller::{SessionController, StepOutcome};
pub use session::{AudioRef, Message, MessageRole, Session, SessionStatus};
pub use view::SessionView;

//! Podcast timeline assembly
//!
//! This module converts the narration script plus the per-step user
//! recordings into:
//! - An ordered, gapless playback timeline (intro, alternating narration
//!   and user clips, outro) with configured segment durations
//! - A human-readable script alternating narration and quoted user blocks

mod assembler;
mod script;
mod timeline;

pub use assembler::{NarrationVoice, PodcastAssembler};
pub use script::{render_script, NarrationLine, NarrationScript};
pub use timeline::{AudioPayload, EntryKind, PodcastResult, TimelineConfig, TimelineEntry};

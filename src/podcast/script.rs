use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A scripted narration sentence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationLine {
    pub text: String,

    /// Nominal authoring offset in seconds. Playback timing comes from
    /// the assembled timeline, not from this value.
    #[serde(default)]
    pub start_offset_secs: f64,
}

/// The narration script: an episode title plus the ordered connective
/// lines voiced between user clips
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationScript {
    pub title: String,
    pub lines: Vec<NarrationLine>,
}

impl Default for NarrationScript {
    fn default() -> Self {
        Self {
            title: "那个停下的瞬间".to_string(),
            lines: vec![
                NarrationLine {
                    text: "每个人都有一个不得不面对自己的时刻。".to_string(),
                    start_offset_secs: 0.0,
                },
                NarrationLine {
                    text: "有时候，停下来不是放弃，而是为了更好地认识自己。".to_string(),
                    start_offset_secs: 8.0,
                },
                NarrationLine {
                    text: "这就是今天的故事，一个关于停下的故事。".to_string(),
                    start_offset_secs: 16.0,
                },
            ],
        }
    }
}

/// Render the human-readable script.
///
/// Walks the narration lines in order; each line becomes a `【旁白】`
/// block, followed by a quoted `【用户原声】` block when a transcript
/// exists for that step. Blocks are separated by blank lines. The layout
/// is user-visible output and must stay stable.
pub fn render_script(script: &NarrationScript, transcripts: &BTreeMap<usize, String>) -> String {
    let mut out = String::new();

    for (index, line) in script.lines.iter().enumerate() {
        out.push_str("【旁白】\n");
        out.push_str(&line.text);
        out.push_str("\n\n");

        if let Some(quote) = transcripts.get(&index) {
            out.push_str("【用户原声】\n\"");
            out.push_str(quote);
            out.push_str("\"\n\n");
        }
    }

    out
}

use serde::{Deserialize, Serialize};

/// One interview step: a titled prompt the user answers by recording
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepPrompt {
    /// Short step title shown in progress indicators
    pub title: String,

    /// The question the assistant asks for this step
    pub prompt: String,
}

/// Configuration for the guided interview
///
/// Prompts are data, not code: swapping the interview script requires no
/// controller changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewConfig {
    /// Welcome message seeded before the first prompt
    pub welcome: String,

    /// Ordered step prompts; one recording is collected per step
    pub steps: Vec<StepPrompt>,
}

impl InterviewConfig {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            welcome: "你好，我是你的AI语音播客编导。我们将通过三段对话，把你的故事变成一期精彩的播客。"
                .to_string(),
            steps: vec![
                StepPrompt {
                    title: "回忆瞬间".to_string(),
                    prompt: "我们不需要一个完整故事。就说最近一次，你突然觉得'有点不对劲'的时候。你想到的第一个画面是什么？"
                        .to_string(),
                },
                StepPrompt {
                    title: "重建现场".to_string(),
                    prompt: "你能带我回到那个瞬间吗？当时具体发生了什么？".to_string(),
                },
                StepPrompt {
                    title: "自我认知".to_string(),
                    prompt: "如果现在回头看那一刻，你会怎么形容当时的自己？".to_string(),
                },
            ],
        }
    }
}

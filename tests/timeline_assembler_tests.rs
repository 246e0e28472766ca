// Integration tests for the podcast timeline assembler
//
// These tests verify the cursor arithmetic (contiguous, gapless entries),
// the boundary entry kinds, the exact script layout, and the
// abort-on-first-failure synthesis behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storycast::speech::{SpeechError, SynthesizedAudio, TtsRequest, TtsService};
use storycast::{
    AudioPayload, AudioRef, EntryKind, NarrationLine, NarrationScript, NarrationVoice,
    PodcastAssembler, SessionError, TimelineConfig,
};

/// TTS mock that records synthesized texts and can fail on a chosen call
struct RecordingTts {
    synthesized: Mutex<Vec<String>>,
    calls: AtomicUsize,
    fail_on_call: Option<usize>,
}

impl RecordingTts {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            synthesized: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail_on_call: None,
        })
    }

    fn failing_on(call: usize) -> Arc<Self> {
        Arc::new(Self {
            synthesized: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail_on_call: Some(call),
        })
    }
}

#[async_trait]
impl TtsService for RecordingTts {
    async fn synthesize(&self, request: &TtsRequest) -> Result<SynthesizedAudio, SpeechError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on_call == Some(call) {
            return Err(SpeechError::Service {
                status: 500,
                body: "tts unavailable".to_string(),
            });
        }
        self.synthesized.lock().unwrap().push(request.text.clone());
        Ok(SynthesizedAudio {
            audio_base64: format!("bmFycmF0aW9uLW{}", call),
            request_id: None,
        })
    }
}

fn script(texts: &[&str]) -> NarrationScript {
    NarrationScript {
        title: "测试播客".to_string(),
        lines: texts
            .iter()
            .map(|text| NarrationLine {
                text: text.to_string(),
                start_offset_secs: 0.0,
            })
            .collect(),
    }
}

fn clips(steps: &[usize]) -> BTreeMap<usize, AudioRef> {
    steps
        .iter()
        .map(|&step| {
            (
                step,
                AudioRef {
                    bytes: vec![step as u8; 32],
                    url: Some(format!("/uploads/clip-{}.wav", step)),
                },
            )
        })
        .collect()
}

fn assembler(tts: Arc<RecordingTts>) -> PodcastAssembler {
    PodcastAssembler::new(tts, TimelineConfig::default(), NarrationVoice::default())
}

#[tokio::test]
async fn test_timeline_entries_are_contiguous() {
    let assembler = assembler(RecordingTts::new());

    let result = assembler
        .assemble(&script(&["一", "二", "三"]), &clips(&[0, 1, 2]), &BTreeMap::new())
        .await
        .unwrap();

    let timeline = &result.timeline;
    assert_eq!(timeline.first().unwrap().kind, EntryKind::IntroMusic);
    assert_eq!(timeline.last().unwrap().kind, EntryKind::OutroMusic);
    assert_eq!(timeline.first().unwrap().start_time, 0.0);

    // Each entry starts where the previous one ends: no overlap, no gaps
    for pair in timeline.windows(2) {
        assert_eq!(pair[1].start_time, pair[0].start_time + pair[0].duration);
    }
}

#[tokio::test]
async fn test_three_answered_steps_make_eight_entries_thirty_seconds() {
    // intro 3s + 3 * (narration 4s + clip 4s) + outro 3s = 30s
    let assembler = assembler(RecordingTts::new());

    let result = assembler
        .assemble(&script(&["一", "二", "三"]), &clips(&[0, 1, 2]), &BTreeMap::new())
        .await
        .unwrap();

    assert_eq!(result.timeline.len(), 8);
    assert_eq!(result.total_duration, 30.0);

    let kinds: Vec<EntryKind> = result.timeline.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntryKind::IntroMusic,
            EntryKind::Narration,
            EntryKind::UserClip,
            EntryKind::Narration,
            EntryKind::UserClip,
            EntryKind::Narration,
            EntryKind::UserClip,
            EntryKind::OutroMusic,
        ]
    );

    assert_eq!(result.narration_count, 3);
    assert_eq!(result.user_clip_count, 3);
}

#[tokio::test]
async fn test_total_duration_equals_sum_of_entry_durations() {
    let assembler = assembler(RecordingTts::new());

    let result = assembler
        .assemble(&script(&["一", "二", "三"]), &clips(&[0, 2]), &BTreeMap::new())
        .await
        .unwrap();

    let sum: f64 = result.timeline.iter().map(|e| e.duration).sum();
    assert_eq!(result.total_duration, sum);

    let last = result.timeline.last().unwrap();
    assert_eq!(result.total_duration, last.start_time + last.duration);
}

#[tokio::test]
async fn test_steps_without_audio_are_skipped() {
    let assembler = assembler(RecordingTts::new());

    let result = assembler
        .assemble(&script(&["一", "二", "三"]), &clips(&[0]), &BTreeMap::new())
        .await
        .unwrap();

    // intro + 3 narrations + 1 clip + outro
    assert_eq!(result.timeline.len(), 6);
    assert_eq!(result.user_clip_count, 1);
    assert_eq!(result.total_duration, 3.0 + 3.0 * 4.0 + 4.0 + 3.0);
}

#[tokio::test]
async fn test_script_text_layout_is_exact() {
    let assembler = assembler(RecordingTts::new());

    let mut transcripts = BTreeMap::new();
    transcripts.insert(0, "X".to_string());

    let result = assembler
        .assemble(&script(&["A", "B"]), &clips(&[0]), &transcripts)
        .await
        .unwrap();

    assert_eq!(
        result.script,
        "【旁白】\nA\n\n【用户原声】\n\"X\"\n\n【旁白】\nB\n\n"
    );
    assert_eq!(result.title, "测试播客");
}

#[tokio::test]
async fn test_narration_is_synthesized_in_input_order() {
    let tts = RecordingTts::new();
    let assembler = assembler(tts.clone());

    assembler
        .assemble(
            &script(&["第一句", "第二句", "第三句"]),
            &clips(&[]),
            &BTreeMap::new(),
        )
        .await
        .unwrap();

    let synthesized = tts.synthesized.lock().unwrap();
    assert_eq!(*synthesized, vec!["第一句", "第二句", "第三句"]);
}

#[tokio::test]
async fn test_synthesis_failure_aborts_without_partial_result() {
    let tts = RecordingTts::failing_on(1);
    let assembler = assembler(tts.clone());

    let err = assembler
        .assemble(&script(&["一", "二", "三"]), &clips(&[0, 1, 2]), &BTreeMap::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::GenerationFailed(_)));

    // Synthesis stopped at the failed line; later lines were never sent
    assert_eq!(tts.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_empty_script_is_rejected() {
    let assembler = assembler(RecordingTts::new());

    let err = assembler
        .assemble(&script(&[]), &clips(&[]), &BTreeMap::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SessionError::InvalidInput(_)));
}

#[tokio::test]
async fn test_user_clip_payload_prefers_upload_url() {
    let assembler = assembler(RecordingTts::new());

    let mut user_audio = BTreeMap::new();
    user_audio.insert(
        0,
        AudioRef {
            bytes: vec![1, 2, 3],
            url: Some("/uploads/clip-0.wav".to_string()),
        },
    );
    user_audio.insert(
        1,
        AudioRef {
            bytes: vec![4, 5, 6],
            url: None,
        },
    );

    let result = assembler
        .assemble(&script(&["一", "二"]), &user_audio, &BTreeMap::new())
        .await
        .unwrap();

    let clips: Vec<&AudioPayload> = result
        .timeline
        .iter()
        .filter(|e| e.kind == EntryKind::UserClip)
        .map(|e| &e.payload)
        .collect();

    assert_eq!(
        clips[0],
        &AudioPayload::Reference {
            url: "/uploads/clip-0.wav".to_string()
        }
    );
    // No URL: the recorded bytes are inlined as base64
    assert!(matches!(clips[1], AudioPayload::Inline { .. }));
}

#[tokio::test]
async fn test_timeline_entry_wire_shape() {
    let assembler = assembler(RecordingTts::new());

    let result = assembler
        .assemble(&script(&["一"]), &clips(&[0]), &BTreeMap::new())
        .await
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();

    // Entries are tagged with `type` and flatten their payload
    assert_eq!(value["timeline"][0]["type"], "intro_music");
    assert_eq!(value["timeline"][0]["url"], "/api/audio/intro-music");
    assert_eq!(value["timeline"][1]["type"], "narration");
    assert!(value["timeline"][1]["audio_base64"].is_string());
    assert_eq!(value["timeline"][2]["type"], "user_clip");
    assert_eq!(value["timeline"][3]["type"], "outro_music");

    // The total is serialized as `duration`
    assert_eq!(value["duration"], 14.0);
}

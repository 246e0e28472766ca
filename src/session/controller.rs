use super::config::InterviewConfig;
use super::session::{AudioRef, MessageRole, Session, SessionStatus};
use super::view::SessionView;
use crate::error::SessionError;
use crate::podcast::{NarrationScript, PodcastAssembler, PodcastResult};
use crate::speech::{AsrService, SpeechError};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Placeholder shown while the ASR collaborator works on a recording
const TRANSCRIBING_PLACEHOLDER: &str = "[转录中...]";

/// User-visible copy for the assistant side of the log
const TRANSCRIPTION_APOLOGY: &str = "抱歉，我没有听清刚才的录音，请再试一次。";
const GENERATING_NOTICE: &str = "正在为你生成播客，这需要几秒钟...";
const PODCAST_READY: &str = "🎉 你的播客已经准备好了！点击下方播放按钮听听效果。";
const GENERATION_APOLOGY: &str = "抱歉，播客生成失败了，请重新开始。";

/// What resolving a transcript led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The next prompt was appended; collection continues at `next_step`
    NextPrompt { next_step: usize },

    /// All steps are answered; the session is now `generating` and
    /// `generate()` may be invoked
    InterviewComplete,
}

/// A submitted recording whose transcription has not resolved yet
#[derive(Debug)]
struct PendingRecording {
    step: usize,
    message_id: u64,
    audio: AudioRef,
}

/// Drives the guided interview: sequences the prompts, captures
/// transcripts, and decides when to hand off to the podcast assembler.
///
/// The controller exclusively owns its `Session` and processes one event
/// at a time; callers serialize access (the HTTP layer wraps each
/// controller in its own mutex).
pub struct SessionController {
    session: Session,
    interview: InterviewConfig,
    script: NarrationScript,
    asr: Arc<dyn AsrService>,
    assembler: PodcastAssembler,
    pending: Option<PendingRecording>,
    /// Id of the "generating" notice, resolved in place on completion
    notice_id: Option<u64>,
    podcast: Option<PodcastResult>,
}

impl SessionController {
    pub fn new(
        session_id: impl Into<String>,
        interview: InterviewConfig,
        script: NarrationScript,
        asr: Arc<dyn AsrService>,
        assembler: PodcastAssembler,
    ) -> Self {
        Self {
            session: Session::new(session_id),
            interview,
            script,
            asr,
            assembler,
            pending: None,
            notice_id: None,
            podcast: None,
        }
    }

    /// Seed the session with the welcome message and the first prompt.
    ///
    /// Calling `start` on an already-seeded session is a no-op.
    pub fn start(&mut self) -> &Session {
        if !self.session.messages().is_empty() {
            warn!("Session {} already started", self.session.id());
            return &self.session;
        }

        info!("Starting interview session: {}", self.session.id());

        self.session
            .push_message(MessageRole::Assistant, self.interview.welcome.clone(), None);

        if let Some(step) = self.interview.steps.first() {
            self.session
                .push_message(MessageRole::Assistant, step.prompt.clone(), None);
        }

        &self.session
    }

    /// Accept a completed recording for the current step and append its
    /// placeholder user message.
    ///
    /// Returns the placeholder message id; the transcript is delivered
    /// later via `resolve_transcript` (or `fail_transcription` on ASR
    /// error). While a recording is unresolved, further submissions are
    /// rejected. The session is left unmodified on every error.
    pub fn begin_recording(
        &mut self,
        step_index: usize,
        audio: AudioRef,
    ) -> Result<u64, SessionError> {
        if self.session.status() != SessionStatus::Collecting {
            return Err(SessionError::WrongState(self.session.status()));
        }

        if let Some(pending) = &self.pending {
            return Err(SessionError::RecordingInFlight(pending.step));
        }

        let current = self.session.current_step();
        if step_index != current {
            return Err(SessionError::OutOfOrderRecording {
                submitted: step_index,
                current,
            });
        }

        if audio.bytes.is_empty() {
            return Err(SessionError::InvalidInput(
                "recorded audio is empty".to_string(),
            ));
        }

        info!(
            "Session {}: recording submitted for step {} ({} bytes)",
            self.session.id(),
            step_index,
            audio.bytes.len()
        );

        let message_id = self.session.push_message(
            MessageRole::User,
            TRANSCRIBING_PLACEHOLDER.to_string(),
            audio.url.clone(),
        );

        self.pending = Some(PendingRecording {
            step: step_index,
            message_id,
            audio,
        });

        Ok(message_id)
    }

    /// Submit a completed recording for the current step and drive it
    /// through transcription.
    ///
    /// Convenience over `begin_recording` + the ASR collaborator +
    /// `resolve_transcript`. On ASR failure the session stays at the same
    /// step with an apology appended, so the recording can be retried.
    pub async fn submit_recording(
        &mut self,
        step_index: usize,
        audio: AudioRef,
    ) -> Result<StepOutcome, SessionError> {
        let bytes = audio.bytes.clone();
        let message_id = self.begin_recording(step_index, audio)?;

        let asr = Arc::clone(&self.asr);
        match asr.transcribe(&bytes).await {
            Ok(transcription) => self.resolve_transcript(message_id, transcription.text),
            Err(err) => Err(self.fail_transcription(err)),
        }
    }

    /// Resolve the pending placeholder into its final transcript.
    ///
    /// Stores the answer for the pending step, then either appends the
    /// next prompt or, on the final step, transitions the session to
    /// `generating`.
    pub fn resolve_transcript(
        &mut self,
        message_id: u64,
        text: String,
    ) -> Result<StepOutcome, SessionError> {
        let pending = match self.pending.take() {
            Some(pending) if pending.message_id == message_id => pending,
            Some(pending) => {
                let err = SessionError::InvalidInput(format!(
                    "message {} is not awaiting transcription",
                    message_id
                ));
                self.pending = Some(pending);
                return Err(err);
            }
            None => {
                return Err(SessionError::InvalidInput(
                    "no recording awaiting transcription".to_string(),
                ));
            }
        };

        let step = pending.step;
        self.session.resolve_message(message_id, text.clone());
        self.session.record_answer(step, text, pending.audio);

        info!(
            "Session {}: transcript resolved for step {}",
            self.session.id(),
            step
        );

        if step + 1 < self.interview.step_count() {
            let next = step + 1;
            self.session.set_current_step(next);
            self.session.push_message(
                MessageRole::Assistant,
                self.interview.steps[next].prompt.clone(),
                None,
            );
            Ok(StepOutcome::NextPrompt { next_step: next })
        } else {
            self.session.set_status(SessionStatus::Generating);
            let notice_id =
                self.session
                    .push_message(MessageRole::Assistant, GENERATING_NOTICE.to_string(), None);
            self.notice_id = Some(notice_id);

            info!(
                "Session {}: all {} steps answered, ready to generate",
                self.session.id(),
                self.interview.step_count()
            );

            Ok(StepOutcome::InterviewComplete)
        }
    }

    /// Assemble the podcast from the collected answers.
    ///
    /// Valid only once the session is `generating`. On success the session
    /// becomes `ready` and the result is stored; calling again returns the
    /// stored result unchanged. Any collaborator failure moves the session
    /// to `failed`, which only `reset` leaves.
    pub async fn generate(&mut self) -> Result<&PodcastResult, SessionError> {
        if self.session.status() == SessionStatus::Ready && self.podcast.is_some() {
            return Ok(self.podcast.as_ref().unwrap());
        }

        if self.session.status() != SessionStatus::Generating {
            return Err(SessionError::WrongState(self.session.status()));
        }

        info!("Session {}: assembling podcast", self.session.id());

        let assembled = self
            .assembler
            .assemble(
                &self.script,
                self.session.audio_refs(),
                self.session.transcripts(),
            )
            .await;

        match assembled {
            Ok(result) => {
                match self.notice_id.take() {
                    Some(id) => {
                        self.session.resolve_message(id, PODCAST_READY.to_string());
                    }
                    None => {
                        self.session.push_message(
                            MessageRole::Assistant,
                            PODCAST_READY.to_string(),
                            None,
                        );
                    }
                }
                self.session.set_status(SessionStatus::Ready);

                info!(
                    "Session {}: podcast ready ({} timeline entries, {:.1}s)",
                    self.session.id(),
                    result.timeline.len(),
                    result.total_duration
                );

                Ok(self.podcast.insert(result))
            }
            Err(err) => {
                self.session.set_status(SessionStatus::Failed);
                self.session.push_message(
                    MessageRole::Assistant,
                    GENERATION_APOLOGY.to_string(),
                    None,
                );

                error!("Session {}: podcast generation failed: {}", self.session.id(), err);

                Err(err)
            }
        }
    }

    /// Clear the session back to its initial state. The caller starts a
    /// new interview with `start`.
    pub fn reset(&mut self) {
        info!("Resetting session {}", self.session.id());
        self.session = Session::new(self.session.id().to_string());
        self.pending = None;
        self.notice_id = None;
        self.podcast = None;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The assembled podcast, once the session is `ready`
    pub fn podcast(&self) -> Option<&PodcastResult> {
        self.podcast.as_ref()
    }

    /// The prompt for the step currently being collected
    pub fn current_prompt(&self) -> Option<&str> {
        self.interview
            .steps
            .get(self.session.current_step())
            .map(|step| step.prompt.as_str())
    }

    /// Read-only snapshot for API responses
    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.session.id().to_string(),
            status: self.session.status(),
            current_step: self.session.current_step(),
            steps_total: self.interview.step_count(),
            messages: self.session.messages().to_vec(),
        }
    }

    /// Record an ASR failure for the pending recording.
    ///
    /// Clears the pending slot and appends a plain-language apology; the
    /// session stays in `collecting` at the same step so the recording
    /// can be retried.
    pub fn fail_transcription(&mut self, err: SpeechError) -> SessionError {
        warn!(
            "Session {}: transcription failed: {}",
            self.session.id(),
            err
        );

        self.pending = None;
        self.session.push_message(
            MessageRole::Assistant,
            TRANSCRIPTION_APOLOGY.to_string(),
            None,
        );

        SessionError::TranscriptionFailed(err.to_string())
    }
}

//! Text-to-speech capability and the cancel-before-speak discipline around it.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::NarrationError;

/// Voice settings passed with every utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceParams {
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            lang: "en-US".to_string(),
            rate: 1.0,
            pitch: 1.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: VoiceParams,
}

/// Speech output provided by the host.
///
/// `speak` is fire-and-forget: it queues the utterance and returns.
pub trait Narrator: Send + Sync {
    /// # Errors
    ///
    /// Returns `NarrationError::Unavailable` when the host cannot speak.
    fn speak(&self, utterance: &Utterance) -> Result<(), NarrationError>;

    /// Stop every queued or playing utterance.
    fn cancel_all(&self);
}

/// Narrator used when speech is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn speak(&self, _utterance: &Utterance) -> Result<(), NarrationError> {
        Ok(())
    }

    fn cancel_all(&self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationStatus {
    Ready,
    Unavailable,
}

/// Keeps at most one utterance active by cancelling before each new one.
#[derive(Clone)]
pub struct NarrationService {
    narrator: Arc<dyn Narrator>,
    voice: VoiceParams,
    status: NarrationStatus,
    supported: bool,
}

impl NarrationService {
    #[must_use]
    pub fn new(narrator: Arc<dyn Narrator>) -> Self {
        Self {
            narrator,
            voice: VoiceParams::default(),
            status: NarrationStatus::Ready,
            supported: true,
        }
    }

    #[must_use]
    pub fn silent() -> Self {
        Self::new(Arc::new(SilentNarrator))
    }

    #[must_use]
    pub fn with_voice(mut self, voice: VoiceParams) -> Self {
        self.voice = voice;
        self
    }

    #[must_use]
    pub fn voice(&self) -> &VoiceParams {
        &self.voice
    }

    #[must_use]
    pub fn status(&self) -> NarrationStatus {
        self.status
    }

    /// Record that the host has no speech engine. Later calls to `narrate`
    /// are skipped and the status stays `Unavailable`.
    pub fn mark_unsupported(&mut self) {
        if self.supported {
            warn!("speech output is not supported by this host");
        }
        self.supported = false;
        self.status = NarrationStatus::Unavailable;
    }

    /// Cancel whatever is playing, then speak `text`.
    pub fn narrate(&mut self, text: &str) -> NarrationStatus {
        if !self.supported {
            return self.status;
        }
        self.narrator.cancel_all();
        let utterance = Utterance {
            text: text.to_owned(),
            voice: self.voice.clone(),
        };
        match self.narrator.speak(&utterance) {
            Ok(()) => {
                debug!(chars = text.len(), "narration started");
                self.status = NarrationStatus::Ready;
            }
            Err(err) => {
                warn!(error = %err, "narration failed");
                self.status = NarrationStatus::Unavailable;
            }
        }
        self.status
    }

    pub fn silence(&self) {
        self.narrator.cancel_all();
    }
}

impl std::fmt::Debug for NarrationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NarrationService")
            .field("voice", &self.voice)
            .field("status", &self.status)
            .field("supported", &self.supported)
            .finish_non_exhaustive()
    }
}

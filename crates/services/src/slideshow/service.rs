use tracing::{debug, info};
use woodland_core::SlideshowTiming;
use woodland_core::model::{
    Direction, PendingNavigation, Slide, SlideshowSession, UploadFailure, UploadTicket,
};

use crate::decode::{DecodedUpload, FileDecoder, UploadFile, decode_uploads};
use crate::error::SlideshowError;
use crate::narration::{NarrationService, NarrationStatus};

/// How many files of an upload batch were staged or rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageReport {
    pub staged: usize,
    pub failed: usize,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Drives a `SlideshowSession` and narrates slide changes.
///
/// Narration always goes through `NarrationService`, so a new caption cancels
/// whatever was still being spoken.
#[derive(Debug, Clone)]
pub struct SlideshowService {
    session: SlideshowSession,
    narration: NarrationService,
    timing: SlideshowTiming,
}

impl SlideshowService {
    #[must_use]
    pub fn new(slides: Vec<Slide>, narration: NarrationService) -> Self {
        Self {
            session: SlideshowSession::new(slides),
            narration,
            timing: SlideshowTiming::default(),
        }
    }

    #[must_use]
    pub fn with_timing(mut self, timing: SlideshowTiming) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn with_narration_enabled(mut self, enabled: bool) -> Self {
        self.session = self.session.with_narration(enabled);
        self
    }

    #[must_use]
    pub fn session(&self) -> &SlideshowSession {
        &self.session
    }

    #[must_use]
    pub fn timing(&self) -> SlideshowTiming {
        self.timing
    }

    #[must_use]
    pub fn narration_status(&self) -> NarrationStatus {
        self.narration.status()
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.session.current_slide()
    }

    /// Narrate the opening slide when narration starts enabled.
    pub fn on_mount(&mut self) {
        if self.session.narration_enabled() {
            self.speak_current();
        }
    }

    // ─── Navigation ────────────────────────────────────────────────────────────

    /// Start the fade-out for a move; `None` when there are no slides.
    pub fn begin_navigation(&mut self, direction: Direction) -> Option<PendingNavigation> {
        self.session.begin_navigation(direction)
    }

    /// Finish a move and narrate the new caption if narration is on and the
    /// slide actually changed.
    pub fn complete_navigation(&mut self, pending: PendingNavigation) -> Option<usize> {
        let step = self.session.complete_navigation(pending)?;
        if step.moved {
            debug!(index = step.index, direction = ?pending.direction(), "slide changed");
            if self.session.narration_enabled() {
                self.speak_current();
            }
        }
        Some(step.index)
    }

    /// Move one step without waiting for the fade.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        let pending = self.begin_navigation(direction)?;
        self.complete_navigation(pending)
    }

    // ─── Narration ─────────────────────────────────────────────────────────────

    /// Flip narration. Turning it on speaks the current caption; turning it
    /// off stops any speech.
    pub fn toggle_narration(&mut self) -> bool {
        let enabled = self.session.toggle_narration();
        if enabled {
            self.speak_current();
        } else {
            self.narration.silence();
        }
        debug!(enabled, "narration toggled");
        enabled
    }

    /// The host cannot speak; keep the tour running silently.
    pub fn mark_narration_unsupported(&mut self) {
        self.narration.mark_unsupported();
    }

    /// Speak the current caption whether or not narration is enabled.
    pub fn hear_description(&mut self) {
        self.speak_current();
    }

    fn speak_current(&mut self) {
        if let Some(caption) = self.session.current_slide().map(|slide| slide.caption().to_owned()) {
            self.narration.narrate(&caption);
        }
    }

    // ─── Uploads ───────────────────────────────────────────────────────────────

    #[must_use]
    pub fn begin_upload(&self) -> UploadTicket {
        self.session.begin_upload()
    }

    /// Stage decoded files in the order given.
    ///
    /// Successes become temporary slides with empty captions; failures are
    /// kept for display. A stale ticket stages nothing.
    pub fn finish_upload(&mut self, ticket: UploadTicket, decoded: Vec<DecodedUpload>) -> StageReport {
        if !self.session.is_current(ticket) {
            debug!(files = decoded.len(), "dropping uploads for a closed slideshow");
            return StageReport::default();
        }

        let mut report = StageReport::default();
        for upload in decoded {
            match upload.result {
                Ok(source) => {
                    if self.session.stage_upload(ticket, source).is_some() {
                        report.staged += 1;
                    }
                }
                Err(err) => {
                    let failure = UploadFailure {
                        file_name: upload.file_name,
                        reason: err.to_string(),
                    };
                    if self.session.record_upload_failure(ticket, failure) {
                        report.failed += 1;
                    }
                }
            }
        }
        debug!(staged = report.staged, failed = report.failed, "upload batch staged");
        report
    }

    /// Decode `files` and stage the results.
    ///
    /// Holds `self` across the decode; shells that share the service between
    /// tasks should call `begin_upload`, `decode_uploads` and `finish_upload`
    /// separately.
    pub async fn stage_uploads(
        &mut self,
        decoder: &dyn FileDecoder,
        files: Vec<UploadFile>,
    ) -> StageReport {
        let ticket = self.begin_upload();
        let decoded = decode_uploads(decoder, files).await;
        self.finish_upload(ticket, decoded)
    }

    /// # Errors
    ///
    /// Returns `SlideshowError::NoSuchUpload` if `index` is not a staged upload.
    pub fn edit_caption(&mut self, index: usize, caption: impl Into<String>) -> Result<(), SlideshowError> {
        if self.session.edit_caption(index, caption) {
            Ok(())
        } else {
            Err(SlideshowError::NoSuchUpload {
                index,
                len: self.session.pending_uploads().len(),
            })
        }
    }

    /// Append every staged upload to the slideshow.
    pub fn commit_uploads(&mut self) -> usize {
        let added = self.session.commit_uploads();
        if added > 0 {
            info!(added, total = self.session.len(), "uploads added to slideshow");
        }
        added
    }

    pub fn dismiss_upload_failures(&mut self) {
        self.session.dismiss_upload_failures();
    }

    /// Stop speech and invalidate pending navigations and upload batches.
    pub fn teardown(&mut self) {
        self.narration.silence();
        self.session.teardown();
    }
}

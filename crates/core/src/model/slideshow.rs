use crate::model::{ImageSource, Slide, SlideId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

impl Direction {
    /// Index one step away from `index` in a ring of `len` slides.
    ///
    /// `len` must be non-zero.
    #[must_use]
    fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Forward => (index + 1) % len,
            Direction::Back => (index + len - 1) % len,
        }
    }
}

/// A navigation that has faded out and waits to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingNavigation {
    direction: Direction,
    epoch: u64,
}

impl PendingNavigation {
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Result of applying a `PendingNavigation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationStep {
    pub index: usize,
    /// False when the step landed on the same slide, as in a one-slide ring.
    pub moved: bool,
}

/// Binds an upload batch to the session that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    epoch: u64,
}

/// An uploaded file that could not be turned into a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub file_name: String,
    pub reason: String,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Presentation state of one slideshow instance.
///
/// Navigation is two-phase: `begin_navigation` starts the fade-out and hands
/// back a token, `complete_navigation` moves the index one step and fades back
/// in. The index is always valid for the current slide count.
///
/// Every async result (navigation tokens, upload tickets) carries the session
/// epoch; `teardown` bumps it so results that arrive late are dropped.
#[derive(Debug, Clone)]
pub struct SlideshowSession {
    slides: Vec<Slide>,
    current_index: usize,
    in_flight: u32,
    narration_enabled: bool,
    pending_uploads: Vec<Slide>,
    upload_failures: Vec<UploadFailure>,
    epoch: u64,
    next_id: SlideId,
}

impl SlideshowSession {
    /// Start on the first slide with narration enabled.
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        let next_id = slides
            .iter()
            .map(Slide::id)
            .max()
            .map_or_else(|| SlideId::new(1), SlideId::next);

        Self {
            slides,
            current_index: 0,
            in_flight: 0,
            narration_enabled: true,
            pending_uploads: Vec::new(),
            upload_failures: Vec::new(),
            epoch: 0,
            next_id,
        }
    }

    #[must_use]
    pub fn with_narration(mut self, enabled: bool) -> Self {
        self.narration_enabled = enabled;
        self
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current_index)
    }

    /// True between the start of a fade-out and the matching completion.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.in_flight > 0
    }

    #[must_use]
    pub fn narration_enabled(&self) -> bool {
        self.narration_enabled
    }

    /// Flip narration and return the new value.
    pub fn toggle_narration(&mut self) -> bool {
        self.narration_enabled = !self.narration_enabled;
        self.narration_enabled
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    // ─── Navigation ────────────────────────────────────────────────────────────

    /// Fade out ahead of a move. Returns `None` when there is nothing to show.
    pub fn begin_navigation(&mut self, direction: Direction) -> Option<PendingNavigation> {
        if self.slides.is_empty() {
            return None;
        }
        self.in_flight = self.in_flight.saturating_add(1);
        Some(PendingNavigation {
            direction,
            epoch: self.epoch,
        })
    }

    /// Apply one step for `pending` and fade back in.
    ///
    /// The step is taken from the index and slide count at completion time.
    /// Returns `None` when the token belongs to a torn-down session or the
    /// slide list is empty.
    pub fn complete_navigation(&mut self, pending: PendingNavigation) -> Option<NavigationStep> {
        if pending.epoch != self.epoch {
            return None;
        }
        self.in_flight = self.in_flight.saturating_sub(1);

        let len = self.slides.len();
        if len == 0 {
            return None;
        }
        let previous = self.current_index;
        self.current_index = pending.direction.step(previous, len);
        Some(NavigationStep {
            index: self.current_index,
            moved: self.current_index != previous,
        })
    }

    /// Move immediately, skipping the fade.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        let pending = self.begin_navigation(direction)?;
        self.complete_navigation(pending).map(|step| step.index)
    }

    // ─── Upload staging ────────────────────────────────────────────────────────

    #[must_use]
    pub fn pending_uploads(&self) -> &[Slide] {
        &self.pending_uploads
    }

    #[must_use]
    pub fn upload_failures(&self) -> &[UploadFailure] {
        &self.upload_failures
    }

    #[must_use]
    pub fn begin_upload(&self) -> UploadTicket {
        UploadTicket { epoch: self.epoch }
    }

    #[must_use]
    pub fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.epoch == self.epoch
    }

    /// Stage one decoded image with an empty caption.
    ///
    /// Returns `None` when the ticket is stale.
    pub fn stage_upload(&mut self, ticket: UploadTicket, source: ImageSource) -> Option<SlideId> {
        if !self.is_current(ticket) {
            return None;
        }
        let id = self.next_id;
        self.next_id = id.next();
        self.pending_uploads.push(Slide::staged(id, source));
        Some(id)
    }

    /// Remember a file that failed to decode. Returns false for stale tickets.
    pub fn record_upload_failure(&mut self, ticket: UploadTicket, failure: UploadFailure) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.upload_failures.push(failure);
        true
    }

    pub fn dismiss_upload_failures(&mut self) {
        self.upload_failures.clear();
    }

    /// Replace the caption of one staged upload. Returns false when `index`
    /// is out of range.
    pub fn edit_caption(&mut self, index: usize, caption: impl Into<String>) -> bool {
        match self.pending_uploads.get_mut(index) {
            Some(slide) => {
                slide.set_caption(caption);
                true
            }
            None => false,
        }
    }

    /// Move every staged upload, in order, to the end of the slideshow.
    ///
    /// Leaves the current index and narration untouched. Returns how many
    /// slides were added.
    pub fn commit_uploads(&mut self) -> usize {
        let staged = std::mem::take(&mut self.pending_uploads);
        let count = staged.len();
        self.slides
            .extend(staged.into_iter().map(Slide::into_committed));
        count
    }

    /// Invalidate outstanding tokens and tickets.
    pub fn teardown(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.in_flight = 0;
    }
}

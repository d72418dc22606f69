use std::sync::Arc;

use services::{
    FileDecoder, NarrationService, Narrator, QuizError, QuizService, SlideshowService,
};
use woodland_core::SlideshowTiming;
use woodland_core::model::{Question, Slide};

pub trait UiApp: Send + Sync {
    fn quiz_questions(&self) -> Vec<Question>;
    fn tour_slides(&self) -> Vec<Slide>;
    fn narrator(&self) -> Arc<dyn Narrator>;
    fn decoder(&self) -> Arc<dyn FileDecoder>;
    fn timing(&self) -> SlideshowTiming;
    /// Ask the webview whether it can speak before narrating.
    fn checks_speech_support(&self) -> bool;
}

/// Everything the views need, resolved once at launch.
///
/// Each view builds its own controller from here, so remounting a view starts
/// a fresh quiz or tour.
#[derive(Clone)]
pub struct AppContext {
    questions: Arc<[Question]>,
    slides: Arc<[Slide]>,
    narrator: Arc<dyn Narrator>,
    decoder: Arc<dyn FileDecoder>,
    timing: SlideshowTiming,
    checks_speech_support: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questions: app.quiz_questions().into(),
            slides: app.tour_slides().into(),
            narrator: app.narrator(),
            decoder: app.decoder(),
            timing: app.timing(),
            checks_speech_support: app.checks_speech_support(),
        }
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the app was launched without questions.
    pub fn new_quiz(&self) -> Result<QuizService, QuizError> {
        QuizService::new(self.questions.to_vec())
    }

    #[must_use]
    pub fn new_tour(&self) -> SlideshowService {
        let narration = NarrationService::new(Arc::clone(&self.narrator));
        SlideshowService::new(self.slides.to_vec(), narration).with_timing(self.timing)
    }

    #[must_use]
    pub fn decoder(&self) -> Arc<dyn FileDecoder> {
        Arc::clone(&self.decoder)
    }

    #[must_use]
    pub fn timing(&self) -> SlideshowTiming {
        self.timing
    }

    #[must_use]
    pub fn checks_speech_support(&self) -> bool {
        self.checks_speech_support
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

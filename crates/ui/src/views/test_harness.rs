use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{DataUrlDecoder, FileDecoder, NarrationError, Narrator, Utterance};
use woodland_core::SlideshowTiming;
use woodland_core::catalog::{default_questions, default_slides};
use woodland_core::model::{Question, Slide};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, QuizView, TourView};

/// Records every call so tests can check cancel-before-speak ordering.
#[derive(Default)]
pub struct RecordingNarrator {
    calls: Mutex<Vec<String>>,
}

impl RecordingNarrator {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

impl Narrator for RecordingNarrator {
    fn speak(&self, utterance: &Utterance) -> Result<(), NarrationError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("speak:{}", utterance.text));
        Ok(())
    }

    fn cancel_all(&self) {
        self.calls.lock().unwrap().push("cancel".to_string());
    }
}

struct TestApp {
    questions: Vec<Question>,
    slides: Vec<Slide>,
    narrator: Arc<RecordingNarrator>,
    timing: SlideshowTiming,
}

impl UiApp for TestApp {
    fn quiz_questions(&self) -> Vec<Question> {
        self.questions.clone()
    }

    fn tour_slides(&self) -> Vec<Slide> {
        self.slides.clone()
    }

    fn narrator(&self) -> Arc<dyn Narrator> {
        self.narrator.clone()
    }

    fn decoder(&self) -> Arc<dyn FileDecoder> {
        Arc::new(DataUrlDecoder::default())
    }

    fn timing(&self) -> SlideshowTiming {
        self.timing
    }

    fn checks_speech_support(&self) -> bool {
        false
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Tour,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Tour => rsx! { TourView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub narrator: Arc<RecordingNarrator>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    /// Run spawned tasks and re-render until `duration` of tokio time has
    /// passed. Meant for tests with a paused clock.
    pub async fn drive_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::Instant::now() < deadline {
            let _ = tokio::time::timeout_at(deadline, self.dom.wait_for_work()).await;
            self.dom.render_immediate(&mut NoOpMutations);
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, default_questions(), default_slides())
}

pub fn setup_view_harness_with(
    view: ViewKind,
    questions: Vec<Question>,
    slides: Vec<Slide>,
) -> ViewHarness {
    setup_harness(view, questions, slides, SlideshowTiming::default())
}

pub fn setup_tour_harness_with_timing(timing: SlideshowTiming) -> ViewHarness {
    setup_harness(ViewKind::Tour, default_questions(), default_slides(), timing)
}

fn setup_harness(
    view: ViewKind,
    questions: Vec<Question>,
    slides: Vec<Slide>,
    timing: SlideshowTiming,
) -> ViewHarness {
    let narrator = Arc::new(RecordingNarrator::default());
    let app = Arc::new(TestApp {
        questions,
        slides,
        narrator: Arc::clone(&narrator),
        timing,
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, narrator }
}

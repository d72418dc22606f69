use std::time::Duration;

use woodland_core::SlideshowTiming;
use woodland_core::catalog::default_slides;

use super::test_harness::{
    ViewKind, setup_tour_harness_with_timing, setup_view_harness, setup_view_harness_with,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_counts() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("4 questions"), "missing question count in {html}");
    assert!(html.contains("8 slides with narration"), "missing slide count in {html}");
    assert!(html.contains("Start Quiz"), "missing quiz link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 4"), "missing progress in {html}");
    assert!(
        html.contains("What is one of the most common tree species"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Spruce"), "missing option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness_with(ViewKind::Quiz, Vec::new(), default_slides());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("No quiz questions are available."),
        "missing empty message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn tour_view_smoke_narrates_first_slide() {
    let mut harness = setup_view_harness(ViewKind::Tour);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Lush canopy of the woodland."), "missing caption in {html}");
    assert!(html.contains("1 / 8"), "missing position in {html}");
    assert!(html.contains("Pause Narration"), "missing toggle in {html}");
    assert_eq!(
        harness.narrator.calls(),
        vec!["cancel", "speak:Lush canopy of the woodland."]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn tour_view_smoke_renders_without_slides() {
    let mut harness = setup_view_harness_with(
        ViewKind::Tour,
        woodland_core::catalog::default_questions(),
        Vec::new(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No slides to show."), "missing empty stage in {html}");
    assert!(harness.narrator.calls().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn tour_view_auto_advances_after_fade() {
    let timing =
        SlideshowTiming::new(Duration::from_millis(100), Duration::from_millis(20)).unwrap();
    let mut harness = setup_tour_harness_with_timing(timing);
    harness.rebuild();
    harness.narrator.take();

    harness.drive_for(Duration::from_millis(150)).await;

    let html = harness.render();
    assert!(html.contains("2 / 8"), "missing advanced position in {html}");
    assert!(
        html.contains("Dense green foliage shining in sunlight."),
        "missing second caption in {html}"
    );
    assert!(html.contains("tour-image--visible"), "slide still faded in {html}");
    assert_eq!(
        harness.narrator.take(),
        vec!["cancel", "speak:Dense green foliage shining in sunlight."]
    );
}

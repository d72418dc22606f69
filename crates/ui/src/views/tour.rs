use std::time::Duration;

use dioxus::prelude::*;
use services::{Direction, SelectedFile, SlideshowService, UploadFile, decode_selection};
use tracing::warn;

use crate::context::AppContext;
use crate::platform::speech_supported;
use crate::vm::{TourVm, map_tour};

/// Fade out, wait, then move one slide.
async fn play_navigation(
    mut tour: Signal<SlideshowService>,
    direction: Direction,
    fade_delay: Duration,
) {
    let Some(pending) = tour.write().begin_navigation(direction) else {
        return;
    };
    if !fade_delay.is_zero() {
        tokio::time::sleep(fade_delay).await;
    }
    tour.write().complete_navigation(pending);
}

#[component]
pub fn TourView() -> Element {
    let ctx = use_context::<AppContext>();
    let decoder = ctx.decoder();
    let timing = ctx.timing();
    let checks_speech_support = ctx.checks_speech_support();
    let mut tour = use_signal(|| {
        let mut tour = ctx.new_tour();
        tour.on_mount();
        tour
    });

    use_future(move || async move {
        if checks_speech_support && !speech_supported().await {
            tour.write().mark_narration_unsupported();
        }
    });

    // Owned by this view: dropped, and so cancelled, on unmount.
    use_future(move || async move {
        let mut ticker = tokio::time::interval(timing.advance_interval());
        ticker.tick().await;
        loop {
            ticker.tick().await;
            play_navigation(tour, Direction::Forward, timing.fade_delay()).await;
        }
    });

    use_drop(move || {
        if let Ok(mut tour) = tour.try_write() {
            tour.teardown();
        }
    });

    let vm: TourVm = map_tour(&tour.read());
    let fade_delay = timing.fade_delay();

    let pending_items = vm.pending.iter().map(|upload| {
        let mut tour = tour;
        let index = upload.index;
        rsx! {
            div { key: "{upload.key}", class: "tour-upload",
                img { class: "tour-upload-preview", src: "{upload.src}", alt: "Preview" }
                input {
                    class: "tour-upload-caption",
                    r#type: "text",
                    placeholder: "Type caption here...",
                    value: "{upload.caption}",
                    oninput: move |evt| {
                        if let Err(err) = tour.write().edit_caption(index, evt.value()) {
                            warn!(error = %err, "caption edit ignored");
                        }
                    },
                }
            }
        }
    });

    rsx! {
        div { class: "page tour-page",
            h2 { class: "view-title", "Virtual Tour of the Woodland" }

            div { class: "tour-stage",
                if let Some(slide) = vm.slide.as_ref() {
                    img {
                        key: "{slide.key}",
                        class: if slide.visible { "tour-image tour-image--visible" } else { "tour-image tour-image--hidden" },
                        src: "{slide.src}",
                        alt: "{slide.alt}",
                    }
                    div { class: "tour-caption",
                        p { "{slide.caption}" }
                    }
                } else {
                    p { class: "tour-empty", "No slides to show." }
                }
                button {
                    class: "tour-nav tour-nav--prev",
                    r#type: "button",
                    disabled: !vm.can_navigate,
                    onclick: move |_| {
                        spawn(play_navigation(tour, Direction::Back, fade_delay));
                    },
                    "❮"
                }
                button {
                    class: "tour-nav tour-nav--next",
                    r#type: "button",
                    disabled: !vm.can_navigate,
                    onclick: move |_| {
                        spawn(play_navigation(tour, Direction::Forward, fade_delay));
                    },
                    "❯"
                }
            }
            p { class: "tour-position", "{vm.position_label}" }

            div { class: "tour-narration",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| tour.write().hear_description(),
                    "Hear Description"
                }
                button {
                    class: if vm.narration_enabled { "btn btn-danger" } else { "btn btn-success" },
                    r#type: "button",
                    onclick: move |_| {
                        tour.write().toggle_narration();
                    },
                    "{vm.narration_label}"
                }
            }
            if let Some(hint) = vm.narration_hint.as_ref() {
                p { class: "view-hint", "{hint}" }
            }

            div { class: "tour-uploads",
                p { "Upload your own images and add captions for the virtual tour:" }
                label { class: "btn btn-secondary tour-upload-button",
                    "Upload Images"
                    input {
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                        style: "display: none",
                        onchange: move |evt: FormEvent| {
                            let files = evt.files();
                            let decoder = decoder.clone();
                            spawn(async move {
                                let ticket = tour.peek().begin_upload();
                                let mut selection = Vec::with_capacity(files.len());
                                for file in files {
                                    let name = file.name();
                                    match file.read_bytes().await {
                                        Ok(bytes) => selection.push(SelectedFile::Read(UploadFile::new(name, bytes.to_vec()))),
                                        Err(err) => {
                                            warn!(file = %name, error = %err, "could not read uploaded file");
                                            selection.push(SelectedFile::Unreadable {
                                                name,
                                                reason: err.to_string(),
                                            });
                                        }
                                    }
                                }
                                let decoded = decode_selection(decoder.as_ref(), selection).await;
                                tour.write().finish_upload(ticket, decoded);
                            });
                        },
                    }
                }
                if !vm.failures.is_empty() {
                    div { class: "tour-upload-failures",
                        ul {
                            for failure in vm.failures.iter() {
                                li { "{failure}" }
                            }
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| tour.write().dismiss_upload_failures(),
                            "Dismiss"
                        }
                    }
                }
                if !vm.pending.is_empty() {
                    div { class: "tour-upload-list",
                        {pending_items}
                        button {
                            class: "btn btn-success",
                            r#type: "button",
                            onclick: move |_| {
                                tour.write().commit_uploads();
                            },
                            "Add to Slideshow"
                        }
                    }
                }
            }
        }
    }
}

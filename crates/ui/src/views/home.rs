use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let question_count = ctx.question_count();
    let slide_count = ctx.slide_count();

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Halifax Woodlands" }
                p { class: "view-subtitle", "Test what you know, then take the tour." }
            }
            div { class: "view-divider" }
            div { class: "home-cards",
                div { class: "home-card",
                    h3 { "Woodlands Quiz" }
                    p { "{question_count} questions" }
                    Link { class: "btn btn-primary", to: Route::Quiz {}, "Start Quiz" }
                }
                div { class: "home-card",
                    h3 { "Virtual Tour" }
                    p { "{slide_count} slides with narration" }
                    Link { class: "btn btn-primary", to: Route::Tour {}, "Start Tour" }
                }
            }
        }
    }
}

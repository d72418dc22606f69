use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, QuizView, TourView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/tour", TourView)] Tour {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Woodland Guide" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Quiz {}, "Quiz" } }
                li { Link { to: Route::Tour {}, "Virtual Tour" } }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HistoryView, HomeView, InterviewView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/interview", InterviewView)] Interview {},
        #[route("/history", HistoryView)] History {},
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
            h1 { "Interview Coach" }
            ul {
                li { Link { to: Route::Home {}, "Dashboard" } }
                li { Link { to: Route::Interview {}, "Interview" } }
                li { Link { to: Route::History {}, "History" } }
            }
        }
    }
}

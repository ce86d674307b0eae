use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::DashboardVm;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let history = ctx.interview_history();
    let display_name = ctx.display_name().to_string();

    let resource = use_resource(move || {
        let history = history.clone();
        async move {
            let stats = history
                .dashboard_stats()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok(DashboardVm::from(stats))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard",
            header { class: "dashboard-header",
                h2 { "Welcome back, {display_name}! 👋" }
                p { "Continue your interview preparation journey" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(stats) => rsx! {
                    div { class: "stats-grid",
                        StatCard { icon: "🎯", label: "Interviews Completed", value: stats.total_interviews }
                        StatCard { icon: "⭐", label: "Average Score", value: stats.average_score }
                        StatCard { icon: "🏆", label: "Best Score", value: stats.best_score }
                        StatCard { icon: "⏱️", label: "Total Practice Time", value: stats.total_time }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }

            section { class: "dashboard-cta",
                h3 { "Ready to Practice?" }
                p { "Choose an interview type and get instant feedback on every answer." }
                Link { class: "cta-button", to: Route::Interview {}, "🎤 Start New Interview" }
            }
        }
    }
}

#[component]
fn StatCard(icon: &'static str, label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-icon", "{icon}" }
            div { class: "stat-content",
                p { class: "stat-label", "{label}" }
                p { class: "stat-value", "{value}" }
            }
        }
    }
}

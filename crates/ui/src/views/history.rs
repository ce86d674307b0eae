use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HistoryCardVm, map_history_cards};

const HISTORY_LIMIT: usize = 50;

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    cards: Vec<HistoryCardVm>,
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let history = ctx.interview_history();

    let resource = use_resource(move || {
        let history = history.clone();
        async move {
            let items = history
                .list_history(HISTORY_LIMIT)
                .await
                .map_err(|_| ViewError::Unknown)?;
            let cards = map_history_cards(&items);
            Ok(HistoryData { cards })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "History" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { "No interviews yet." }
                    } else {
                        ul { class: "history-list",
                            for card in data.cards {
                                HistoryCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn HistoryCard(card: HistoryCardVm) -> Element {
    rsx! {
        li { class: "history-card",
            div { class: "history-head",
                span { class: "history-category", "{card.category_name}" }
                span { class: "history-date", "{card.completed_at_str}" }
            }
            p {
                "Score: {card.average_score}% | Questions: {card.total_questions} | Duration: {card.duration_str}"
            }
        }
    }
}

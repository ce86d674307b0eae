use std::time::Duration;

use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{CompletionVm, InterviewIntent, InterviewVm, SessionScreenVm};
use services::FlowPhase;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TICK: Duration = Duration::from_secs(1);

#[component]
pub fn InterviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let interview_loop = ctx.interview_loop();

    let error = use_signal(|| None::<ViewError>);
    // `None` only while an async step has the vm checked out.
    let vm = use_signal(|| Some(InterviewVm::new()));

    {
        let interview_loop = interview_loop.clone();
        use_future(move || {
            let interview_loop = interview_loop.clone();
            let mut vm = vm;
            async move {
                loop {
                    tokio::time::sleep(TICK).await;
                    if let Some(vm) = vm.write().as_mut() {
                        vm.tick(&interview_loop);
                    }
                }
            }
        });
    }

    let dispatch_intent = {
        let interview_loop = interview_loop.clone();
        use_callback(move |intent: InterviewIntent| {
            let mut error = error;
            let mut vm = vm;

            match intent {
                InterviewIntent::SelectCategory(category) => {
                    let result = match vm.write().as_mut() {
                        Some(vm) => vm.select_category(&interview_loop, category),
                        None => Err(ViewError::Unknown),
                    };
                    error.set(result.err());
                }
                InterviewIntent::Submit => {
                    let result = match vm.write().as_mut() {
                        Some(vm) => vm.submit(&interview_loop),
                        None => Err(ViewError::Unknown),
                    };
                    error.set(result.err());
                }
                InterviewIntent::Back => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.back(&interview_loop);
                    }
                    error.set(None);
                }
                InterviewIntent::Next | InterviewIntent::Retry => {
                    let interview_loop = interview_loop.clone();
                    spawn(async move {
                        let taken = vm.write().take();
                        let Some(mut vm_value) = taken else {
                            error.set(Some(ViewError::Unknown));
                            return;
                        };

                        let result = if intent == InterviewIntent::Next {
                            vm_value.advance(&interview_loop).await.map(|_| ())
                        } else {
                            vm_value.retry_save(&interview_loop).await.map(|_| ())
                        };

                        // Always put the vm back so the screen stays usable after errors.
                        vm.set(Some(vm_value));
                        error.set(result.err());
                    });
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<InterviewTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let on_draft = use_callback(move |text: String| {
        let mut vm = vm;
        if let Some(vm) = vm.write().as_mut() {
            vm.set_draft(text);
        }
    });

    let guard = vm.read();
    let Some(current) = guard.as_ref() else {
        return rsx! {
            div { class: "page interview",
                p { "Saving..." }
            }
        };
    };
    let phase = current.phase();
    let draft = current.draft().to_string();
    let validation = current.validation_message();
    let screen = current.session_screen();
    let completion = current.completion();
    drop(guard);

    let categories = interview_loop.categories();

    rsx! {
        div { class: "page interview",
            if let Some(err) = error() {
                div { class: "error-banner",
                    p { "{err.message()}" }
                }
            }

            match phase {
                FlowPhase::Start => rsx! {
                    div { class: "interview-start",
                        header { class: "interview-header",
                            h2 { "🎯 Start Your Interview" }
                            p { "Choose an interview type to begin coaching" }
                        }
                        div { class: "category-grid",
                            for category in categories.iter() {
                                button {
                                    key: "{category.id()}",
                                    class: "category-card",
                                    id: "category-{category.id()}",
                                    onclick: move |_| dispatch_intent.call(InterviewIntent::SelectCategory(category.id())),
                                    span { class: "category-icon", "{category.icon()}" }
                                    span { class: "category-name", "{category.name()}" }
                                }
                            }
                        }
                    }
                },
                FlowPhase::Answering | FlowPhase::AwaitingNext => rsx! {
                    if let Some(screen) = screen {
                        SessionScreen { screen, draft, validation, dispatch_intent, on_draft }
                    }
                },
                FlowPhase::Complete => rsx! {
                    if let Some(completion) = completion {
                        CompletionScreen { completion, dispatch_intent }
                    }
                },
            }
        }
    }
}

#[component]
fn SessionScreen(
    screen: SessionScreenVm,
    draft: String,
    validation: Option<&'static str>,
    dispatch_intent: Callback<InterviewIntent>,
    on_draft: Callback<String>,
) -> Element {
    let progress_style = format!("width: {}%", screen.progress_percent);

    rsx! {
        div { class: "interview-session",
            div { class: "session-header",
                div { class: "session-info",
                    h3 { "{screen.category_name}" }
                    span { class: "question-count", "{screen.question_label}" }
                }
                div { class: "session-timer", "⏱️ {screen.timer}" }
            }

            div { class: "progress-bar",
                div { class: "progress-fill", style: "{progress_style}" }
            }

            div { class: "question-container",
                div { class: "question-text",
                    h4 { "🎤 {screen.question}" }
                    div { class: "tips",
                        strong { "Tips:" }
                        ul {
                            for tip in screen.tips.iter() {
                                li { "{tip}" }
                            }
                        }
                    }
                }

                textarea {
                    class: "answer-input",
                    id: "answer-input",
                    rows: "6",
                    placeholder: "Type your answer here... (Speak or think through your response)",
                    disabled: screen.awaiting_next,
                    value: "{draft}",
                    oninput: move |evt: FormEvent| on_draft.call(evt.value()),
                }

                if let Some(message) = validation {
                    p { class: "validation", "{message}" }
                }

                if let (Some(score), Some(text)) = (screen.feedback_score, screen.feedback_text) {
                    div { class: "feedback-section",
                        div { class: "feedback-score",
                            span { class: "score-number", "{score}" }
                            span { class: "score-label", "/100" }
                        }
                        div { class: "feedback-text",
                            strong { "Coach Feedback:" }
                            p { "{text}" }
                        }
                        button {
                            class: "next-button",
                            id: "interview-next",
                            onclick: move |_| dispatch_intent.call(InterviewIntent::Next),
                            "{screen.next_label}"
                        }
                    }
                } else {
                    button {
                        class: "submit-button",
                        id: "interview-submit",
                        onclick: move |_| dispatch_intent.call(InterviewIntent::Submit),
                        "Submit Answer"
                    }
                }
            }

            button {
                class: "back-button",
                id: "interview-back",
                onclick: move |_| dispatch_intent.call(InterviewIntent::Back),
                "← Back to Categories"
            }
        }
    }
}

#[component]
fn CompletionScreen(completion: CompletionVm, dispatch_intent: Callback<InterviewIntent>) -> Element {
    rsx! {
        div { class: "interview-completion",
            div { class: "completion-header",
                h2 { "✅ Interview Complete!" }
                p { "Great job practicing today" }
            }

            div { class: "results-summary",
                ResultCard { label: "Interview Type", value: completion.category_name.clone() }
                ResultCard { label: "Average Score", value: format!("{}%", completion.average_score) }
                ResultCard { label: "Questions Answered", value: completion.questions_answered.to_string() }
                ResultCard { label: "Duration", value: completion.duration.clone() }
            }

            div { class: "score-feedback {completion.band_class}",
                h3 { "{completion.band_title}" }
                p { "{completion.band_message}" }
            }

            if !completion.saved {
                div { class: "save-warning",
                    p { "This interview has not been saved to your history yet." }
                    button {
                        class: "btn",
                        id: "interview-retry-save",
                        onclick: move |_| dispatch_intent.call(InterviewIntent::Retry),
                        "Retry Save"
                    }
                }
            }

            button {
                class: "new-interview-button",
                id: "interview-restart",
                onclick: move |_| dispatch_intent.call(InterviewIntent::Back),
                "Start Another Interview"
            }
        }
    }
}

#[component]
fn ResultCard(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "result-card",
            span { class: "result-label", "{label}" }
            span { class: "result-value", "{value}" }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct InterviewTestHandles {
    dispatch: Rc<RefCell<Option<Callback<InterviewIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<InterviewVm>>>>>,
}

#[cfg(test)]
impl InterviewTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<InterviewIntent>,
        vm: Signal<Option<InterviewVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<InterviewIntent> {
        (*self.dispatch.borrow()).expect("interview dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<InterviewVm>> {
        (*self.vm.borrow()).expect("interview vm registered")
    }
}

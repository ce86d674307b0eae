use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use coach_core::ScriptedRandom;
use coach_core::time::fixed_clock;
use services::{InterviewHistoryService, InterviewLoopService};
use storage::repository::{InterviewHistoryRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::interview::InterviewTestHandles;
use crate::views::{HistoryView, HomeView, InterviewView};

#[derive(Clone)]
struct TestApp {
    interview_loop: Arc<InterviewLoopService>,
    interview_history: Arc<InterviewHistoryService>,
}

impl UiApp for TestApp {
    fn display_name(&self) -> String {
        "Tester".to_string()
    }

    fn interview_loop(&self) -> Arc<InterviewLoopService> {
        Arc::clone(&self.interview_loop)
    }

    fn interview_history(&self) -> Arc<InterviewHistoryService> {
        Arc::clone(&self.interview_history)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    History,
    Interview,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    interview_handles: Option<InterviewTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.interview_handles.clone() {
        use_context_provider(|| handles);
    }
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
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::History => rsx! { HistoryView {} },
        ViewKind::Interview => rsx! { InterviewView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub interview_handles: Option<InterviewTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn interview_handles(&self) -> InterviewTestHandles {
        self.interview_handles
            .clone()
            .expect("interview handles for interview view")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let interviews = Arc::clone(&storage.interviews);
    setup_view_harness_with_repo(view, storage, interviews)
}

/// Views read and write through `interviews`; `storage` is kept for seeding and assertions.
pub fn setup_view_harness_with_repo(
    view: ViewKind,
    storage: Storage,
    interviews: Arc<dyn InterviewHistoryRepository>,
) -> ViewHarness {
    let interview_loop = Arc::new(
        InterviewLoopService::new(fixed_clock(), Arc::clone(&interviews))
            .with_random(ScriptedRandom::units([0.55, 0.65, 0.45, 0.8, 0.6])),
    );
    let interview_history = Arc::new(InterviewHistoryService::new(interviews));

    let interview_handles = match view {
        ViewKind::Interview => Some(InterviewTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp {
        interview_loop,
        interview_history,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            interview_handles: interview_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        interview_handles,
    }
}

use std::sync::Arc;

use services::{InterviewHistoryService, InterviewLoopService};

pub trait UiApp: Send + Sync {
    /// Name shown in the dashboard greeting.
    fn display_name(&self) -> String;

    fn interview_loop(&self) -> Arc<InterviewLoopService>;
    fn interview_history(&self) -> Arc<InterviewHistoryService>;
}

#[derive(Clone)]
pub struct AppContext {
    display_name: String,
    interview_loop: Arc<InterviewLoopService>,
    interview_history: Arc<InterviewHistoryService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            display_name: app.display_name(),
            interview_loop: app.interview_loop(),
            interview_history: app.interview_history(),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn interview_loop(&self) -> Arc<InterviewLoopService> {
        Arc::clone(&self.interview_loop)
    }

    #[must_use]
    pub fn interview_history(&self) -> Arc<InterviewHistoryService> {
        Arc::clone(&self.interview_history)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::sessions::{InterviewHistoryService, InterviewLoopService};

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    interview_loop: Arc<InterviewLoopService>,
    interview_history: Arc<InterviewHistoryService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or migrated.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock))
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        let interview_loop = Arc::new(InterviewLoopService::new(
            clock,
            Arc::clone(&storage.interviews),
        ));
        let interview_history = Arc::new(InterviewHistoryService::new(Arc::clone(
            &storage.interviews,
        )));
        Self {
            interview_loop,
            interview_history,
        }
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

//! Shared error types for the services crate.

use thiserror::Error;

use coach_core::model::InterviewError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by interview session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("answer cannot be empty")]
    EmptyAnswer,
    #[error("feedback for the current question is still pending")]
    FeedbackPending,
    #[error("no answer has been submitted for the current question")]
    NoFeedbackPending,
    #[error("no interview is in progress")]
    NotInProgress,
    #[error("an interview is already running or finished")]
    NotAtStart,
    #[error("interview is not complete")]
    NotComplete,
    #[error(transparent)]
    Interview(#[from] InterviewError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode history: {0}")]
    Export(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

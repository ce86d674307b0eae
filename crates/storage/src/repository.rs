use async_trait::async_trait;
use coach_core::model::CompletedInterview;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Fixed key the interview history log is stored under.
pub const INTERVIEW_HISTORY_KEY: &str = "coach_interviews";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A persisted interview together with its storage row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewRow {
    pub id: i64,
    pub record: CompletedInterview,
}

impl InterviewRow {
    #[must_use]
    pub fn new(id: i64, record: CompletedInterview) -> Self {
        Self { id, record }
    }
}

/// Append-only log of completed interviews.
///
/// Records are never edited or removed through this contract.
#[async_trait]
pub trait InterviewHistoryRepository: Send + Sync {
    /// Append a completed interview and return its row id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn append_interview(&self, record: &CompletedInterview) -> Result<i64, StorageError>;

    /// Read every stored interview in append order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read or decode failures.
    async fn list_interviews(&self) -> Result<Vec<InterviewRow>, StorageError>;

    /// Fetch one interview by row id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_interview(&self, id: i64) -> Result<CompletedInterview, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    rows: Arc<Mutex<Vec<InterviewRow>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl InterviewHistoryRepository for InMemoryRepository {
    async fn append_interview(&self, record: &CompletedInterview) -> Result<i64, StorageError> {
        let mut guard = self
            .rows
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let id = guard.last().map_or(1, |row| row.id + 1);
        guard.push(InterviewRow::new(id, record.clone()));
        Ok(id)
    }

    async fn list_interviews(&self) -> Result<Vec<InterviewRow>, StorageError> {
        let guard = self
            .rows
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn get_interview(&self, id: i64) -> Result<CompletedInterview, StorageError> {
        let guard = self
            .rows
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.record.clone())
            .ok_or(StorageError::NotFound)
    }
}

/// Repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub interviews: Arc<dyn InterviewHistoryRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let interviews: Arc<dyn InterviewHistoryRepository> = Arc::new(InMemoryRepository::new());
        Self { interviews }
    }
}

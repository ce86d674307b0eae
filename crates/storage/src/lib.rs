#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    INTERVIEW_HISTORY_KEY, InMemoryRepository, InterviewHistoryRepository, InterviewRow, Storage,
    StorageError,
};

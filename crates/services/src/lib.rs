#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod random;
pub mod sessions;

pub use coach_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use error::{AppServicesError, SessionError};
pub use random::ThreadRandom;

pub use sessions::{
    AdvanceResult, DashboardStats, FlowPhase, InterviewFlow, InterviewHistoryItem,
    InterviewHistoryService, InterviewLoopService, InterviewRecordId, InterviewSession,
    SessionProgress,
};

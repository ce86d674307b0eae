mod flow;
mod progress;
mod service;
mod view;
mod workflow;

// Public API of the interview session subsystem.
pub use crate::error::SessionError;
pub use flow::{Advance, FinishedInterview, FlowPhase, InterviewFlow};
pub use progress::SessionProgress;
pub use service::InterviewSession;
pub use view::{DashboardStats, InterviewHistoryItem, InterviewHistoryService, InterviewRecordId};
pub use workflow::{AdvanceResult, InterviewLoopService};

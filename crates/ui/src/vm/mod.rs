mod dashboard_vm;
mod history_vm;
mod interview_vm;
mod time_fmt;

pub use dashboard_vm::DashboardVm;
pub use history_vm::{HistoryCardVm, map_history_cards};
pub use interview_vm::{
    CompletionVm, EMPTY_ANSWER_MESSAGE, InterviewIntent, InterviewOutcome, InterviewVm,
    SessionScreenVm,
};
pub use time_fmt::{format_clock, format_datetime, format_practice_time};

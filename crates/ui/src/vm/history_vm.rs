use coach_core::model::CategoryId;
use services::{InterviewHistoryItem, InterviewRecordId};

use crate::vm::time_fmt::{format_clock, format_datetime};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryCardVm {
    pub id: InterviewRecordId,
    pub category: CategoryId,
    pub category_name: String,
    pub completed_at_str: String,
    pub total_questions: u32,
    pub average_score: u8,
    pub duration_str: String,
}

impl From<&InterviewHistoryItem> for HistoryCardVm {
    fn from(item: &InterviewHistoryItem) -> Self {
        Self {
            id: item.id,
            category: item.category,
            category_name: item.category_name.clone(),
            completed_at_str: format_datetime(item.completed_at),
            total_questions: item.total_questions,
            average_score: item.average_score,
            duration_str: format_clock(item.total_time_secs),
        }
    }
}

#[must_use]
pub fn map_history_cards(items: &[InterviewHistoryItem]) -> Vec<HistoryCardVm> {
    items.iter().map(HistoryCardVm::from).collect()
}

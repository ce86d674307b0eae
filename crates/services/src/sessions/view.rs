use chrono::{DateTime, Utc};
use std::sync::Arc;

use coach_core::model::{CategoryId, CompletedInterview, Score};
use storage::repository::{InMemoryRepository, InterviewHistoryRepository, InterviewRow};

use crate::error::SessionError;

/// Storage identifier for a persisted interview.
///
/// NOTE: This is currently `i64` to match `SQLite` row IDs.
pub type InterviewRecordId = i64;

/// Presentation-agnostic list item for a finished interview.
///
/// No pre-formatted strings; the UI formats timestamps and durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewHistoryItem {
    pub id: InterviewRecordId,
    pub category: CategoryId,
    pub category_name: String,
    pub completed_at: DateTime<Utc>,
    pub total_questions: u32,
    pub average_score: u8,
    pub total_time_secs: u32,
}

impl InterviewHistoryItem {
    #[must_use]
    pub fn from_row(row: &InterviewRow) -> Self {
        let record = &row.record;
        Self {
            id: row.id,
            category: record.category(),
            category_name: record.category_name().to_string(),
            completed_at: record.timestamp(),
            total_questions: record.total_questions(),
            average_score: record.average_score().value(),
            total_time_secs: record.total_time(),
        }
    }
}

/// Aggregates shown on the dashboard. Empty history has no scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_interviews: usize,
    pub average_score: Option<u8>,
    pub best_score: Option<u8>,
    pub total_time_secs: u64,
}

impl DashboardStats {
    #[must_use]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CompletedInterview>,
    {
        let mut stats = Self::default();
        let mut averages = Vec::new();
        for record in records {
            stats.total_interviews += 1;
            stats.total_time_secs += u64::from(record.total_time());
            averages.push(record.average_score());
        }
        stats.best_score = averages.iter().max().map(|score| score.value());
        stats.average_score = Score::mean(averages).map(Score::value);
        stats
    }
}

/// Read side of the interview history: lists, dashboard figures and export.
#[derive(Clone)]
pub struct InterviewHistoryService {
    interviews: Arc<dyn InterviewHistoryRepository>,
}

impl InterviewHistoryService {
    #[must_use]
    pub fn new(interviews: Arc<dyn InterviewHistoryRepository>) -> Self {
        Self { interviews }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }

    /// Most recent interviews first, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` on repository failures.
    pub async fn list_history(
        &self,
        limit: usize,
    ) -> Result<Vec<InterviewHistoryItem>, SessionError> {
        let rows = self.interviews.list_interviews().await?;
        Ok(rows
            .iter()
            .rev()
            .take(limit)
            .map(InterviewHistoryItem::from_row)
            .collect())
    }

    /// # Errors
    ///
    /// Returns `SessionError::Storage` when the id is unknown or the read fails.
    pub async fn get_interview(
        &self,
        id: InterviewRecordId,
    ) -> Result<CompletedInterview, SessionError> {
        Ok(self.interviews.get_interview(id).await?)
    }

    /// # Errors
    ///
    /// Returns `SessionError::Storage` on repository failures.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, SessionError> {
        let rows = self.interviews.list_interviews().await?;
        Ok(DashboardStats::from_records(rows.iter().map(|row| &row.record)))
    }

    /// Whole history as a pretty-printed JSON array, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` on read failures or `SessionError::Export`
    /// if encoding fails.
    pub async fn export_json(&self) -> Result<String, SessionError> {
        let rows = self.interviews.list_interviews().await?;
        let records: Vec<&CompletedInterview> = rows.iter().map(|row| &row.record).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Duration;
    use coach_core::model::AnswerRecord;
    use coach_core::time::fixed_now;

    fn record(category: CategoryId, scores: &[u8], seconds: u32, offset_days: i64) -> CompletedInterview {
        let answers = scores
            .iter()
            .map(|score| AnswerRecord::new("Q", "A", Score::new(*score).unwrap()))
            .collect();
        CompletedInterview::from_answers(
            category,
            category.as_str(),
            answers,
            seconds,
            fixed_now() + Duration::days(offset_days),
        )
        .unwrap()
    }

    #[test]
    fn empty_history_has_no_scores() {
        let stats = DashboardStats::from_records(std::iter::empty());
        assert_eq!(stats, DashboardStats::default());
        assert!(stats.average_score.is_none());
        assert!(stats.best_score.is_none());
    }

    #[test]
    fn stats_over_known_records() {
        let records = [
            record(CategoryId::Technical, &[70, 72, 68, 75, 71], 300, 0),
            record(CategoryId::Hr, &[60], 3_600, 1),
            record(CategoryId::Case, &[78], 45, 2),
        ];
        let stats = DashboardStats::from_records(records.iter());

        assert_eq!(stats.total_interviews, 3);
        // (71 + 60 + 78) / 3 = 69.67
        assert_eq!(stats.average_score, Some(70));
        assert_eq!(stats.best_score, Some(78));
        assert_eq!(stats.total_time_secs, 3_945);
    }

    #[tokio::test]
    async fn history_is_newest_first_and_export_is_append_order() {
        let repo = InMemoryRepository::new();
        let first = record(CategoryId::Behavioral, &[65], 10, 0);
        let second = record(CategoryId::Technical, &[72], 20, 1);
        let first_id = repo.append_interview(&first).await.unwrap();
        let second_id = repo.append_interview(&second).await.unwrap();

        let svc = InterviewHistoryService::new(Arc::new(repo));
        let items = svc.list_history(10).await.unwrap();
        let ids: Vec<_> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![second_id, first_id]);
        assert_eq!(items[0].average_score, 72);
        assert_eq!(items[0].category_name, "technical");

        assert_eq!(svc.list_history(1).await.unwrap().len(), 1);

        let exported: Vec<CompletedInterview> =
            serde_json::from_str(&svc.export_json().await.unwrap()).unwrap();
        assert_eq!(exported, vec![first, second]);
    }

    #[tokio::test]
    async fn missing_interview_is_a_storage_error() {
        let svc = InterviewHistoryService::in_memory();
        let err = svc.get_interview(7).await.unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
    }
}

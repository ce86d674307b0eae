use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answer::{AnswerRecord, Score};
use crate::model::category::CategoryId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InterviewError {
    #[error("an interview needs at least one answer")]
    NoAnswers,

    #[error("too many answers for a single interview: {len}")]
    TooManyAnswers { len: usize },

    #[error("total questions ({total}) does not match answer count ({answers})")]
    CountMismatch { total: u32, answers: usize },

    #[error("average score {stored} does not match answers (expected {expected})")]
    AverageMismatch { stored: u8, expected: u8 },
}

//
// ─── PERFORMANCE BAND ──────────────────────────────────────────────────────────
//

/// Completion-screen tier for an average score.
///
/// The feedback formula rarely produces more than 79, so `Excellent` is
/// effectively unreachable with the stock generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    Excellent,
    Good,
    KeepPracticing,
}

impl PerformanceBand {
    #[must_use]
    pub fn for_score(score: Score) -> Self {
        match score.value() {
            80.. => Self::Excellent,
            60..80 => Self::Good,
            _ => Self::KeepPracticing,
        }
    }
}

//
// ─── COMPLETED INTERVIEW ───────────────────────────────────────────────────────
//

/// Immutable summary of a finished interview, in its persisted shape.
///
/// Serializes as
/// `{category, categoryName, totalQuestions, averageScore, totalTime, timestamp, answers}`.
/// Deserializing runs the same consistency checks as [`CompletedInterview::from_persisted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PersistedInterview")]
pub struct CompletedInterview {
    category: CategoryId,
    category_name: String,
    total_questions: u32,
    average_score: Score,
    total_time: u32,
    timestamp: DateTime<Utc>,
    answers: Vec<AnswerRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedInterview {
    category: CategoryId,
    category_name: String,
    total_questions: u32,
    average_score: Score,
    total_time: u32,
    timestamp: DateTime<Utc>,
    answers: Vec<AnswerRecord>,
}

impl TryFrom<PersistedInterview> for CompletedInterview {
    type Error = InterviewError;

    fn try_from(raw: PersistedInterview) -> Result<Self, Self::Error> {
        Self::from_persisted(
            raw.category,
            raw.category_name,
            raw.total_questions,
            raw.average_score,
            raw.total_time,
            raw.timestamp,
            raw.answers,
        )
    }
}

impl CompletedInterview {
    /// Build the record for a session whose questions have all been answered.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::NoAnswers` for an empty answer list and
    /// `InterviewError::TooManyAnswers` if the count cannot fit in `u32`.
    pub fn from_answers(
        category: CategoryId,
        category_name: impl Into<String>,
        answers: Vec<AnswerRecord>,
        total_time: u32,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, InterviewError> {
        let average_score =
            Score::mean(answers.iter().map(AnswerRecord::score)).ok_or(InterviewError::NoAnswers)?;
        let total_questions = u32::try_from(answers.len())
            .map_err(|_| InterviewError::TooManyAnswers { len: answers.len() })?;

        Ok(Self {
            category,
            category_name: category_name.into(),
            total_questions,
            average_score,
            total_time,
            timestamp,
            answers,
        })
    }

    /// Rehydrate a record from storage, checking it is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError` if the answers are empty, the question count
    /// disagrees with the answers, or the stored average is not their rounded mean.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persisted(
        category: CategoryId,
        category_name: String,
        total_questions: u32,
        average_score: Score,
        total_time: u32,
        timestamp: DateTime<Utc>,
        answers: Vec<AnswerRecord>,
    ) -> Result<Self, InterviewError> {
        if usize::try_from(total_questions).ok() != Some(answers.len()) {
            return Err(InterviewError::CountMismatch {
                total: total_questions,
                answers: answers.len(),
            });
        }
        let expected =
            Score::mean(answers.iter().map(AnswerRecord::score)).ok_or(InterviewError::NoAnswers)?;
        if expected != average_score {
            return Err(InterviewError::AverageMismatch {
                stored: average_score.value(),
                expected: expected.value(),
            });
        }

        Ok(Self {
            category,
            category_name,
            total_questions,
            average_score,
            total_time,
            timestamp,
            answers,
        })
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }

    #[must_use]
    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn average_score(&self) -> Score {
        self.average_score
    }

    /// Seconds spent in the session.
    #[must_use]
    pub fn total_time(&self) -> u32 {
        self.total_time
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn band(&self) -> PerformanceBand {
        PerformanceBand::for_score(self.average_score)
    }
}

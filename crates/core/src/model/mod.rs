mod answer;
mod category;
mod ids;
mod interview;

pub use answer::{AnswerRecord, Score, ScoreError};
pub use category::{Category, CategoryId, CategoryParseError, Question};
pub use ids::{ParseIdError, QuestionId};
pub use interview::{CompletedInterview, InterviewError, PerformanceBand};

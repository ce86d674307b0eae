use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("score must be between 0 and 100, got {0}")]
    OutOfRange(i64),
}

/// Answer or interview score on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 100;

    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` if `value` is above 100.
    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > Self::MAX {
            return Err(ScoreError::OutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }

    /// Pin an arbitrary integer into `[0, 100]`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let pinned = value.clamp(0, i64::from(Self::MAX));
        Self(u8::try_from(pinned).unwrap_or(Self::MAX))
    }

    /// Rounded arithmetic mean, half up. `None` for an empty input.
    #[must_use]
    pub fn mean<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = Score>,
    {
        let (sum, count) = scores
            .into_iter()
            .fold((0_u64, 0_u64), |(sum, count), s| {
                (sum + u64::from(s.0), count + 1)
            });
        if count == 0 {
            return None;
        }
        // Integer half-up rounding: floor((2 * sum + count) / (2 * count)).
        let rounded = (2 * sum + count) / (2 * count);
        Some(Self::clamped(i64::try_from(rounded).unwrap_or(i64::MAX)))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = ScoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| ScoreError::OutOfRange(value))
            .and_then(Score::new)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

//
// ─── ANSWER RECORD ─────────────────────────────────────────────────────────────
//

/// One submitted answer, captured together with the prompt it answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    question: String,
    answer: String,
    score: Score,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>, score: Score) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            score,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }
}

//! Canned coach feedback and the word-count score formula.

use std::collections::VecDeque;

use thiserror::Error;

use crate::model::Score;

/// Stock coach comments. One is picked uniformly per submitted answer.
pub const FEEDBACK_POOL: [&str; 8] = [
    "Great answer! You provided a clear example with good structure. Consider adding more specific metrics.",
    "Good effort. Your answer shows understanding. Try to dive deeper into the why.",
    "Excellent! You covered all key points. Your examples were relatable and well-articulated.",
    "Nice perspective! This shows good thinking. You could strengthen this by discussing trade-offs.",
    "Solid response. You demonstrated knowledge well. In future, try to connect this back to business impact.",
    "Impressive depth! You clearly have experience with this. Don't forget to mention the learning points.",
    "Good start! This is on the right track. Can you elaborate on your approach?",
    "Very thoughtful answer. You showed critical thinking. This would impress any interviewer!",
];

const BASE_SCORE: f64 = 50.0;
const WORDS_FOR_FULL_BONUS: f64 = 30.0;
const MAX_LENGTH_BONUS: f64 = 0.3;
const LENGTH_WEIGHT: f64 = 30.0;
const JITTER_RANGE: f64 = 20.0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("feedback pool cannot be empty")]
    EmptyPool,
}

/// Source of uniform draws for the feedback generator.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Replays scripted draws, for tests.
///
/// Once a script runs dry it keeps returning `0` / `0.0`. Indices are reduced
/// modulo `len` and units are pinned into `[0, 1)`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    indices: VecDeque<usize>,
    units: VecDeque<f64>,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(
        indices: impl IntoIterator<Item = usize>,
        units: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            units: units.into_iter().collect(),
        }
    }

    /// Script only the score jitter; every feedback pick is the first pool entry.
    #[must_use]
    pub fn units(units: impl IntoIterator<Item = f64>) -> Self {
        Self::new(std::iter::empty(), units)
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len.max(1)
    }

    fn next_unit(&mut self) -> f64 {
        let unit = self.units.pop_front().unwrap_or(0.0);
        if unit.is_finite() {
            unit.clamp(0.0, 1.0 - f64::EPSILON)
        } else {
            0.0
        }
    }
}

/// Coach comment plus score for one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    text: &'static str,
    score: Score,
}

impl Feedback {
    #[must_use]
    pub fn new(text: &'static str, score: Score) -> Self {
        Self { text, score }
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }
}

/// Whitespace-delimited token count.
#[must_use]
pub fn word_count(answer: &str) -> usize {
    answer.split_whitespace().count()
}

/// `round(50 + min(words / 30, 0.3) * 30 + unit * 20)`, clamped into `[0, 100]`.
///
/// With `unit` in `[0, 1)` the result lands in `[50, 79]`.
#[must_use]
pub fn score_for(words: usize, unit: f64) -> Score {
    let words = f64::from(u32::try_from(words).unwrap_or(u32::MAX));
    let bonus = (words / WORDS_FOR_FULL_BONUS).min(MAX_LENGTH_BONUS);
    let raw = (BASE_SCORE + bonus * LENGTH_WEIGHT + unit * JITTER_RANGE).round();
    #[allow(clippy::cast_possible_truncation)]
    let raw = raw as i64;
    Score::clamped(raw)
}

/// Produces feedback for a submitted answer.
///
/// Callers are expected to reject blank answers before asking for feedback.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackGenerator {
    pool: &'static [&'static str],
}

impl Default for FeedbackGenerator {
    fn default() -> Self {
        Self {
            pool: &FEEDBACK_POOL,
        }
    }
}

impl FeedbackGenerator {
    /// Generator over a custom comment pool.
    ///
    /// # Errors
    ///
    /// Returns `FeedbackError::EmptyPool` if `pool` has no entries.
    pub fn with_pool(pool: &'static [&'static str]) -> Result<Self, FeedbackError> {
        if pool.is_empty() {
            return Err(FeedbackError::EmptyPool);
        }
        Ok(Self { pool })
    }

    #[must_use]
    pub fn pool(&self) -> &'static [&'static str] {
        self.pool
    }

    /// Pick a comment, then score the answer. Draw order is fixed: index first, unit second.
    pub fn generate(&self, answer: &str, random: &mut dyn RandomSource) -> Feedback {
        let idx = random.next_index(self.pool.len()).min(self.pool.len() - 1);
        let text = self.pool[idx];
        let score = score_for(word_count(answer), random.next_unit());
        Feedback::new(text, score)
    }
}

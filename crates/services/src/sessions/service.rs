use chrono::{DateTime, Utc};
use std::fmt;

use coach_core::model::{AnswerRecord, Category, CompletedInterview, Question};
use coach_core::{ElapsedTimer, Feedback, FeedbackGenerator, RandomSource};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory run through every question of one category.
///
/// Alternates between answering the current question and awaiting the move to
/// the next one. While feedback is pending `answers.len() == current + 1`,
/// otherwise `answers.len() == current`.
pub struct InterviewSession {
    category: &'static Category,
    current: usize,
    answers: Vec<AnswerRecord>,
    pending: Option<Feedback>,
    cumulative_score: u32,
    timer: ElapsedTimer,
    started_at: DateTime<Utc>,
}

/// Whether `advance` moved on or ran out of questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    NextQuestion,
    Finished,
}

impl InterviewSession {
    /// Start at the first question with the timer running.
    ///
    /// `started_at` should come from the services layer clock to keep time deterministic.
    #[must_use]
    pub fn start(category: &'static Category, started_at: DateTime<Utc>) -> Self {
        Self {
            category,
            current: 0,
            answers: Vec::with_capacity(category.question_count()),
            pending: None,
            cumulative_score: 0,
            timer: ElapsedTimer::started(),
            started_at,
        }
    }

    #[must_use]
    pub fn category(&self) -> &'static Category {
        self.category
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.category.question_count()
    }

    /// The question on screen. The index never leaves the category while a
    /// session exists; an empty category has no current question.
    #[must_use]
    pub fn current_question(&self) -> Option<&'static Question> {
        self.category.questions().get(self.current)
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn pending_feedback(&self) -> Option<&Feedback> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn is_awaiting_next(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn cumulative_score(&self) -> u32 {
        self.cumulative_score
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.timer.seconds()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            question_number: self.current + 1,
            total: self.question_count(),
            answered: self.answers.len(),
            awaiting_next: self.is_awaiting_next(),
        }
    }

    /// One second of wall time has passed.
    pub fn tick(&mut self) {
        self.timer.tick();
    }

    /// Score `text` against the current question and hold the feedback until `advance`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::FeedbackPending` if the current question was already answered,
    /// `SessionError::EmptyAnswer` if `text` is blank. Neither mutates the session.
    pub fn submit_answer(
        &mut self,
        text: &str,
        generator: &FeedbackGenerator,
        random: &mut dyn RandomSource,
    ) -> Result<&Feedback, SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::FeedbackPending);
        }
        if text.trim().is_empty() {
            return Err(SessionError::EmptyAnswer);
        }
        let question = self.current_question().ok_or(SessionError::NotInProgress)?;

        let feedback = generator.generate(text, random);
        self.answers
            .push(AnswerRecord::new(question.prompt(), text, feedback.score()));
        self.cumulative_score += u32::from(feedback.score().value());

        Ok(&*self.pending.insert(feedback))
    }

    /// Leave the awaiting-next state.
    ///
    /// On the last question the timer stops and the session is ready for [`Self::finish`].
    pub(crate) fn advance(&mut self) -> Result<Step, SessionError> {
        if self.pending.is_none() {
            return Err(SessionError::NoFeedbackPending);
        }

        if self.current + 1 < self.question_count() {
            self.current += 1;
            self.pending = None;
            Ok(Step::NextQuestion)
        } else {
            self.timer.stop();
            Ok(Step::Finished)
        }
    }

    pub(crate) fn finish(
        &self,
        completed_at: DateTime<Utc>,
    ) -> Result<CompletedInterview, SessionError> {
        Ok(CompletedInterview::from_answers(
            self.category.id(),
            self.category.name(),
            self.answers.clone(),
            self.timer.seconds(),
            completed_at,
        )?)
    }
}

impl fmt::Debug for InterviewSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterviewSession")
            .field("category", &self.category.id())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("awaiting_next", &self.pending.is_some())
            .field("cumulative_score", &self.cumulative_score)
            .field("elapsed", &self.timer.seconds())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::model::CategoryId;
    use coach_core::time::fixed_now;
    use coach_core::{QuestionBank, ScriptedRandom};

    fn technical() -> InterviewSession {
        InterviewSession::start(QuestionBank::new().category(CategoryId::Technical), fixed_now())
    }

    #[test]
    fn blank_answers_leave_session_untouched() {
        let mut session = technical();
        let generator = FeedbackGenerator::default();
        let mut random = ScriptedRandom::default();

        for blank in ["", "   ", "\n\t"] {
            let err = session.submit_answer(blank, &generator, &mut random).unwrap_err();
            assert!(matches!(err, SessionError::EmptyAnswer));
        }
        assert!(session.answers().is_empty());
        assert!(!session.is_awaiting_next());
        assert_eq!(session.cumulative_score(), 0);
    }

    #[test]
    fn submit_records_answer_and_blocks_resubmit() {
        let mut session = technical();
        let generator = FeedbackGenerator::default();
        let mut random = ScriptedRandom::new([1], [0.5]);

        let score = session
            .submit_answer("REST uses resources", &generator, &mut random)
            .unwrap()
            .score();
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.answers()[0].score(), score);
        assert_eq!(
            session.answers()[0].question(),
            "Explain the difference between REST and GraphQL APIs."
        );
        assert_eq!(session.cumulative_score(), u32::from(score.value()));

        let err = session
            .submit_answer("again", &generator, &mut random)
            .unwrap_err();
        assert!(matches!(err, SessionError::FeedbackPending));
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn advance_requires_feedback() {
        let mut session = technical();
        assert!(matches!(
            session.advance().unwrap_err(),
            SessionError::NoFeedbackPending
        ));
    }

    #[test]
    fn advance_moves_through_questions_then_finishes() {
        let mut session = technical();
        let generator = FeedbackGenerator::default();
        let mut random = ScriptedRandom::default();

        for idx in 0..4 {
            assert_eq!(session.current_index(), idx);
            assert_eq!(session.answers().len(), idx);
            session.submit_answer("answer", &generator, &mut random).unwrap();
            assert_eq!(session.advance().unwrap(), Step::NextQuestion);
            assert!(session.pending_feedback().is_none());
        }

        session.submit_answer("last", &generator, &mut random).unwrap();
        session.tick();
        assert_eq!(session.advance().unwrap(), Step::Finished);
        session.tick();
        assert_eq!(session.elapsed_seconds(), 1);
        assert_eq!(session.current_index(), 4);

        let record = session.finish(fixed_now()).unwrap();
        assert_eq!(record.total_questions(), 5);
        assert_eq!(record.total_time(), 1);
    }
}

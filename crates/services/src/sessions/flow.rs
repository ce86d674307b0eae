use chrono::{DateTime, Utc};

use coach_core::model::{Category, CompletedInterview};
use coach_core::{Feedback, FeedbackGenerator, RandomSource};

use super::service::{InterviewSession, Step};
use crate::error::SessionError;

/// Coarse state of the interview screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    Start,
    Answering,
    AwaitingNext,
    Complete,
}

/// Outcome of leaving the awaiting-next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextQuestion,
    Completed,
}

/// A finished run and the history row it was stored under, once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedInterview {
    record: CompletedInterview,
    record_id: Option<i64>,
}

impl FinishedInterview {
    #[must_use]
    pub fn record(&self) -> &CompletedInterview {
        &self.record
    }

    #[must_use]
    pub fn record_id(&self) -> Option<i64> {
        self.record_id
    }
}

/// Start → in progress → complete, with `back` returning to the start from anywhere.
#[derive(Debug, Default)]
pub enum InterviewFlow {
    #[default]
    Start,
    InProgress(InterviewSession),
    Complete(FinishedInterview),
}

impl InterviewFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::Start
    }

    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        match self {
            Self::Start => FlowPhase::Start,
            Self::InProgress(session) if session.is_awaiting_next() => FlowPhase::AwaitingNext,
            Self::InProgress(_) => FlowPhase::Answering,
            Self::Complete(_) => FlowPhase::Complete,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&InterviewSession> {
        match self {
            Self::InProgress(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn finished(&self) -> Option<&FinishedInterview> {
        match self {
            Self::Complete(finished) => Some(finished),
            _ => None,
        }
    }

    /// Begin a session on the first question of `category`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAtStart` unless the flow is at the start screen.
    pub fn select_category(
        &mut self,
        category: &'static Category,
        now: DateTime<Utc>,
    ) -> Result<&InterviewSession, SessionError> {
        if !matches!(self, Self::Start) {
            return Err(SessionError::NotAtStart);
        }
        *self = Self::InProgress(InterviewSession::start(category, now));
        self.session().ok_or(SessionError::NotInProgress)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` outside a running session, otherwise
    /// whatever [`InterviewSession::submit_answer`] rejects.
    pub fn submit_answer(
        &mut self,
        text: &str,
        generator: &FeedbackGenerator,
        random: &mut dyn RandomSource,
    ) -> Result<Feedback, SessionError> {
        match self {
            Self::InProgress(session) => session.submit_answer(text, generator, random).copied(),
            _ => Err(SessionError::NotInProgress),
        }
    }

    /// Move past the pending feedback. After the last question the record is built
    /// with `now` as its timestamp and the flow becomes `Complete`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` outside a running session and
    /// `SessionError::NoFeedbackPending` if the current question is unanswered.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<Advance, SessionError> {
        let Self::InProgress(session) = self else {
            return Err(SessionError::NotInProgress);
        };

        match session.advance()? {
            Step::NextQuestion => Ok(Advance::NextQuestion),
            Step::Finished => {
                let record = session.finish(now)?;
                *self = Self::Complete(FinishedInterview {
                    record,
                    record_id: None,
                });
                Ok(Advance::Completed)
            }
        }
    }

    /// Return to the start screen, dropping any unsaved progress.
    pub fn back(&mut self) {
        *self = Self::Start;
    }

    pub fn tick(&mut self) {
        if let Self::InProgress(session) = self {
            session.tick();
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` unless the flow is complete.
    pub(crate) fn set_record_id(&mut self, id: i64) -> Result<(), SessionError> {
        match self {
            Self::Complete(finished) => {
                finished.record_id = Some(id);
                Ok(())
            }
            _ => Err(SessionError::NotComplete),
        }
    }
}

use std::sync::{Arc, Mutex, PoisonError};

use coach_core::model::{Category, CategoryId};
use coach_core::{Feedback, FeedbackGenerator, QuestionBank, RandomSource};
use storage::repository::InterviewHistoryRepository;

use super::flow::{Advance, InterviewFlow};
use crate::Clock;
use crate::error::SessionError;
use crate::random::ThreadRandom;

/// Result of leaving the awaiting-next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceResult {
    pub is_complete: bool,
    pub record_id: Option<i64>,
}

/// Drives interview flows and appends finished interviews to history.
#[derive(Clone)]
pub struct InterviewLoopService {
    clock: Clock,
    bank: QuestionBank,
    feedback: FeedbackGenerator,
    random: Arc<Mutex<Box<dyn RandomSource + Send>>>,
    interviews: Arc<dyn InterviewHistoryRepository>,
}

impl InterviewLoopService {
    #[must_use]
    pub fn new(clock: Clock, interviews: Arc<dyn InterviewHistoryRepository>) -> Self {
        Self {
            clock,
            bank: QuestionBank::new(),
            feedback: FeedbackGenerator::default(),
            random: Arc::new(Mutex::new(Box::new(ThreadRandom))),
            interviews,
        }
    }

    /// Replace the random source, mainly for scripted scores in tests.
    #[must_use]
    pub fn with_random(mut self, random: impl RandomSource + Send + 'static) -> Self {
        self.random = Arc::new(Mutex::new(Box::new(random)));
        self
    }

    #[must_use]
    pub fn with_feedback(mut self, feedback: FeedbackGenerator) -> Self {
        self.feedback = feedback;
        self
    }

    #[must_use]
    pub fn categories(&self) -> &'static [Category] {
        self.bank.categories()
    }

    /// Start an interview for `category` from the start screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAtStart` if `flow` already holds a session or result.
    pub fn start_interview(
        &self,
        flow: &mut InterviewFlow,
        category: CategoryId,
    ) -> Result<(), SessionError> {
        let category = self.bank.category(category);
        flow.select_category(category, self.clock.now())?;
        tracing::info!(category = %category.id(), questions = category.question_count(), "interview started");
        Ok(())
    }

    /// Score an answer to the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyAnswer` for blank text; the flow is unchanged.
    /// Transition errors are returned when no question is awaiting an answer.
    pub fn submit_answer(
        &self,
        flow: &mut InterviewFlow,
        text: &str,
    ) -> Result<Feedback, SessionError> {
        let mut random = self.random.lock().unwrap_or_else(PoisonError::into_inner);
        let feedback = flow.submit_answer(text, &self.feedback, random.as_mut())?;
        tracing::debug!(score = feedback.score().value(), "answer scored");
        Ok(feedback)
    }

    /// Move to the next question, or finish and append the interview to history.
    ///
    /// # Errors
    ///
    /// Returns transition errors from the flow. If the append fails the flow stays
    /// complete without a record id and `SessionError::Storage` is returned;
    /// [`Self::finalize_record`] retries it.
    pub async fn advance(&self, flow: &mut InterviewFlow) -> Result<AdvanceResult, SessionError> {
        match flow.advance(self.clock.now())? {
            Advance::NextQuestion => {
                tracing::debug!("moved to next question");
                Ok(AdvanceResult {
                    is_complete: false,
                    record_id: None,
                })
            }
            Advance::Completed => {
                let record_id = self.finalize_record(flow).await.inspect_err(|err| {
                    tracing::warn!(error = %err, "failed to append finished interview");
                })?;
                Ok(AdvanceResult {
                    is_complete: true,
                    record_id: Some(record_id),
                })
            }
        }
    }

    /// Append the finished interview if it has not been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` if the flow is not complete.
    /// Returns `SessionError::Storage` if persistence fails.
    pub async fn finalize_record(&self, flow: &mut InterviewFlow) -> Result<i64, SessionError> {
        let finished = flow.finished().ok_or(SessionError::NotComplete)?;
        if let Some(id) = finished.record_id() {
            return Ok(id);
        }

        let record = finished.record();
        let id = self.interviews.append_interview(record).await?;
        tracing::info!(
            id,
            category = %record.category(),
            average = record.average_score().value(),
            seconds = record.total_time(),
            "interview completed"
        );
        flow.set_record_id(id)?;
        Ok(id)
    }

    /// Abandon whatever is on screen; nothing is persisted.
    pub fn back(&self, flow: &mut InterviewFlow) {
        if flow.session().is_some() {
            tracing::debug!("interview abandoned");
        }
        flow.back();
    }

    pub fn tick(&self, flow: &mut InterviewFlow) {
        flow.tick();
    }
}

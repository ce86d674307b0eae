use coach_core::model::{CategoryId, PerformanceBand};
use services::{FlowPhase, InterviewFlow, InterviewLoopService, SessionError};

use crate::views::ViewError;
use crate::vm::time_fmt::format_clock;

pub const EMPTY_ANSWER_MESSAGE: &str = "Please provide an answer before continuing.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterviewIntent {
    SelectCategory(CategoryId),
    Submit,
    Next,
    Retry,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterviewOutcome {
    Continue,
    Completed { record_id: Option<i64> },
}

/// Everything the session screen shows for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionScreenVm {
    pub category_name: &'static str,
    pub question_label: String,
    pub timer: String,
    pub progress_percent: u8,
    pub question: &'static str,
    pub tips: &'static [&'static str],
    pub awaiting_next: bool,
    pub feedback_score: Option<u8>,
    pub feedback_text: Option<&'static str>,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionVm {
    pub category_name: String,
    pub average_score: u8,
    pub questions_answered: u32,
    pub duration: String,
    pub band_title: &'static str,
    pub band_message: &'static str,
    pub band_class: &'static str,
    pub saved: bool,
}

fn band_copy(band: PerformanceBand) -> (&'static str, &'static str, &'static str) {
    match band {
        PerformanceBand::Excellent => (
            "🌟 Excellent Performance!",
            "You demonstrated strong communication and deep thinking. Keep practicing to maintain this level!",
            "feedback-excellent",
        ),
        PerformanceBand::Good => (
            "👍 Good Job!",
            "You showed understanding and good effort. Focus on the tips and practice more for better results.",
            "feedback-good",
        ),
        PerformanceBand::KeepPracticing => (
            "💪 Keep Practicing!",
            "Every interview is a learning opportunity. Review the feedback and try another interview to improve.",
            "feedback-improve",
        ),
    }
}

/// Interview screen state: the flow plus the answer draft and inline validation.
#[derive(Debug, Default)]
pub struct InterviewVm {
    flow: InterviewFlow,
    draft: String,
    validation: Option<&'static str>,
}

impl InterviewVm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> FlowPhase {
        self.flow.phase()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Editing the answer clears a stale validation message.
    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
        self.validation = None;
    }

    #[must_use]
    pub fn validation_message(&self) -> Option<&'static str> {
        self.validation
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if an interview is already on screen.
    pub fn select_category(
        &mut self,
        interview_loop: &InterviewLoopService,
        category: CategoryId,
    ) -> Result<(), ViewError> {
        interview_loop
            .start_interview(&mut self.flow, category)
            .map_err(|_| ViewError::Unknown)?;
        self.draft.clear();
        self.validation = None;
        Ok(())
    }

    /// Submit the draft. A blank draft only sets the validation message.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when no question is waiting for an answer.
    pub fn submit(&mut self, interview_loop: &InterviewLoopService) -> Result<(), ViewError> {
        match interview_loop.submit_answer(&mut self.flow, &self.draft) {
            Ok(_) => {
                self.validation = None;
                Ok(())
            }
            Err(SessionError::EmptyAnswer) => {
                self.validation = Some(EMPTY_ANSWER_MESSAGE);
                Ok(())
            }
            Err(_) => Err(ViewError::Unknown),
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` for transition or persistence failures. After a
    /// failed save the screen still shows the completed interview.
    pub async fn advance(
        &mut self,
        interview_loop: &InterviewLoopService,
    ) -> Result<InterviewOutcome, ViewError> {
        let result = interview_loop
            .advance(&mut self.flow)
            .await
            .map_err(|_| ViewError::Unknown)?;
        self.draft.clear();

        if result.is_complete {
            return Ok(InterviewOutcome::Completed {
                record_id: result.record_id,
            });
        }
        Ok(InterviewOutcome::Continue)
    }

    /// Retry saving a completed interview.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the save fails again.
    pub async fn retry_save(
        &mut self,
        interview_loop: &InterviewLoopService,
    ) -> Result<i64, ViewError> {
        interview_loop
            .finalize_record(&mut self.flow)
            .await
            .map_err(|_| ViewError::Unknown)
    }

    pub fn back(&mut self, interview_loop: &InterviewLoopService) {
        interview_loop.back(&mut self.flow);
        self.draft.clear();
        self.validation = None;
    }

    pub fn tick(&mut self, interview_loop: &InterviewLoopService) {
        interview_loop.tick(&mut self.flow);
    }

    #[must_use]
    pub fn session_screen(&self) -> Option<SessionScreenVm> {
        let session = self.flow.session()?;
        let question = session.current_question()?;
        let progress = session.progress();
        let feedback = session.pending_feedback();

        Some(SessionScreenVm {
            category_name: session.category().name(),
            question_label: format!("Question {} of {}", progress.question_number, progress.total),
            timer: format_clock(session.elapsed_seconds()),
            progress_percent: progress.percent(),
            question: question.prompt(),
            tips: question.tips(),
            awaiting_next: progress.awaiting_next,
            feedback_score: feedback.map(|f| f.score().value()),
            feedback_text: feedback.map(|f| f.text()),
            next_label: if progress.is_last_question() {
                "Finish Interview"
            } else {
                "Next Question"
            },
        })
    }

    #[must_use]
    pub fn completion(&self) -> Option<CompletionVm> {
        let finished = self.flow.finished()?;
        let record = finished.record();
        let (band_title, band_message, band_class) = band_copy(record.band());

        Some(CompletionVm {
            category_name: record.category_name().to_string(),
            average_score: record.average_score().value(),
            questions_answered: record.total_questions(),
            duration: format_clock(record.total_time()),
            band_title,
            band_message,
            band_class,
            saved: finished.record_id().is_some(),
        })
    }
}

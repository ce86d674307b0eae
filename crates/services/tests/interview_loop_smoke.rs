use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use coach_core::ScriptedRandom;
use coach_core::model::{CategoryId, CompletedInterview};
use coach_core::time::fixed_clock;
use services::{FlowPhase, InterviewFlow, InterviewLoopService, SessionError};
use storage::repository::{
    InMemoryRepository, InterviewHistoryRepository, InterviewRow, StorageError,
};

const NINE_WORDS: &str = "I would profile first and then cache hot reads";

#[tokio::test]
async fn technical_interview_persists_rounded_average() {
    let repo = InMemoryRepository::new();
    let svc = InterviewLoopService::new(fixed_clock(), Arc::new(repo.clone()))
        .with_random(ScriptedRandom::units([0.55, 0.65, 0.45, 0.8, 0.6]));
    let mut flow = InterviewFlow::new();

    svc.start_interview(&mut flow, CategoryId::Technical).unwrap();
    let mut scores = Vec::new();
    let mut completions = 0;
    for _ in 0..5 {
        let feedback = svc.submit_answer(&mut flow, NINE_WORDS).unwrap();
        scores.push(feedback.score().value());
        svc.tick(&mut flow);
        let result = svc.advance(&mut flow).await.unwrap();
        if result.is_complete {
            completions += 1;
            assert!(result.record_id.is_some());
        }
    }
    assert_eq!(scores, vec![70, 72, 68, 75, 71]);
    assert_eq!(completions, 1);
    assert_eq!(flow.phase(), FlowPhase::Complete);

    let rows = repo.list_interviews().await.unwrap();
    assert_eq!(rows.len(), 1);
    let record = &rows[0].record;
    assert_eq!(record.average_score().value(), 71);
    assert_eq!(record.total_questions(), 5);
    assert_eq!(record.category_name(), "Technical Interview");
    assert_eq!(record.total_time(), 5);
    assert_eq!(record.answers()[0].answer(), NINE_WORDS);
}

#[tokio::test]
async fn back_mid_session_persists_nothing() {
    let repo = InMemoryRepository::new();
    let svc = InterviewLoopService::new(fixed_clock(), Arc::new(repo.clone()));
    let mut flow = InterviewFlow::new();

    svc.start_interview(&mut flow, CategoryId::Behavioral).unwrap();
    svc.submit_answer(&mut flow, "First answer").unwrap();
    svc.advance(&mut flow).await.unwrap();
    svc.submit_answer(&mut flow, "Second answer").unwrap();
    svc.back(&mut flow);

    assert_eq!(flow.phase(), FlowPhase::Start);
    assert!(repo.list_interviews().await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_answers_do_not_change_the_session() {
    let svc = InterviewLoopService::new(fixed_clock(), Arc::new(InMemoryRepository::new()));
    let mut flow = InterviewFlow::new();
    svc.start_interview(&mut flow, CategoryId::Case).unwrap();

    for blank in ["", "   "] {
        let err = svc.submit_answer(&mut flow, blank).unwrap_err();
        assert!(matches!(err, SessionError::EmptyAnswer));
    }
    assert_eq!(flow.phase(), FlowPhase::Answering);
    assert!(flow.session().unwrap().answers().is_empty());
}

#[tokio::test]
async fn scores_stay_in_formula_range() {
    let svc = InterviewLoopService::new(fixed_clock(), Arc::new(InMemoryRepository::new()));
    for category in CategoryId::ALL {
        let mut flow = InterviewFlow::new();
        svc.start_interview(&mut flow, category).unwrap();
        let session = flow.session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());

        for _ in 0..5 {
            let score = svc.submit_answer(&mut flow, NINE_WORDS).unwrap().score().value();
            assert!((50..=79).contains(&score), "score {score} out of range");
            svc.advance(&mut flow).await.unwrap();
        }
        assert_eq!(flow.phase(), FlowPhase::Complete);
    }
}

/// Fails appends until `healthy` is flipped.
#[derive(Clone, Default)]
struct FlakyRepository {
    inner: InMemoryRepository,
    healthy: Arc<AtomicBool>,
}

#[async_trait]
impl InterviewHistoryRepository for FlakyRepository {
    async fn append_interview(&self, record: &CompletedInterview) -> Result<i64, StorageError> {
        if !self.healthy.load(Ordering::SeqCst) {
            return Err(StorageError::Connection("disk unavailable".into()));
        }
        self.inner.append_interview(record).await
    }

    async fn list_interviews(&self) -> Result<Vec<InterviewRow>, StorageError> {
        self.inner.list_interviews().await
    }

    async fn get_interview(&self, id: i64) -> Result<CompletedInterview, StorageError> {
        self.inner.get_interview(id).await
    }
}

#[tokio::test]
async fn failed_append_stays_complete_and_can_be_finalized() {
    let repo = FlakyRepository::default();
    let svc = InterviewLoopService::new(fixed_clock(), Arc::new(repo.clone()));
    let mut flow = InterviewFlow::new();

    svc.start_interview(&mut flow, CategoryId::Hr).unwrap();
    for _ in 0..4 {
        svc.submit_answer(&mut flow, "answer").unwrap();
        svc.advance(&mut flow).await.unwrap();
    }
    svc.submit_answer(&mut flow, "last answer").unwrap();

    let err = svc.advance(&mut flow).await.unwrap_err();
    assert!(matches!(err, SessionError::Storage(_)));
    assert_eq!(flow.phase(), FlowPhase::Complete);
    assert!(flow.finished().unwrap().record_id().is_none());

    repo.healthy.store(true, Ordering::SeqCst);
    let id = svc.finalize_record(&mut flow).await.unwrap();
    assert_eq!(flow.finished().unwrap().record_id(), Some(id));
    assert_eq!(svc.finalize_record(&mut flow).await.unwrap(), id);
    assert_eq!(repo.list_interviews().await.unwrap().len(), 1);
}

#[tokio::test]
async fn finalize_before_completion_is_rejected() {
    let svc = InterviewLoopService::new(fixed_clock(), Arc::new(InMemoryRepository::new()));
    let mut flow = InterviewFlow::new();
    svc.start_interview(&mut flow, CategoryId::Technical).unwrap();

    let err = svc.finalize_record(&mut flow).await.unwrap_err();
    assert!(matches!(err, SessionError::NotComplete));
}

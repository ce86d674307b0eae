use std::sync::Arc;

use dioxus::prelude::WritableExt;

use coach_core::model::{AnswerRecord, CategoryId, CompletedInterview, Score};
use coach_core::time::fixed_now;
use storage::repository::{InterviewHistoryRepository, InterviewRow, Storage, StorageError};

use super::test_harness::{ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_repo};
use crate::vm::{EMPTY_ANSWER_MESSAGE, InterviewIntent};

fn record(category: CategoryId, name: &str, scores: &[u8], seconds: u32) -> CompletedInterview {
    let answers = scores
        .iter()
        .map(|score| AnswerRecord::new("Q", "A", Score::new(*score).unwrap()))
        .collect();
    CompletedInterview::from_answers(category, name, answers, seconds, fixed_now()).unwrap()
}

fn dispatch(harness: &ViewHarness, intent: InterviewIntent) {
    let handle = harness.interview_handles().dispatch();
    harness.dom.in_runtime(|| handle.call(intent));
}

fn set_draft(harness: &ViewHarness, text: &str) {
    let mut vm = harness.interview_handles().vm();
    harness.dom.in_runtime(|| {
        if let Some(vm) = vm.write().as_mut() {
            vm.set_draft(text.to_string());
        }
    });
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_stats() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness
        .storage
        .interviews
        .append_interview(&record(CategoryId::Technical, "Technical Interview", &[70, 72], 1_800))
        .await
        .expect("append");
    harness
        .storage
        .interviews
        .append_interview(&record(CategoryId::Hr, "HR Interview", &[60], 1_920))
        .await
        .expect("append");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Welcome back, Tester!"), "missing greeting in {html}");
    assert!(html.contains("Interviews Completed"), "missing label in {html}");
    assert!(html.contains("66%"), "missing average in {html}");
    assert!(html.contains("71%"), "missing best in {html}");
    assert!(html.contains("1h 2m"), "missing practice time in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_dashes_when_empty() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Average Score"), "missing label in {html}");
    assert!(html.contains(">-<"), "missing empty marker in {html}");
    assert!(html.contains("Start New Interview"), "missing call to action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_cards() {
    let mut harness = setup_view_harness(ViewKind::History);
    harness
        .storage
        .interviews
        .append_interview(&record(CategoryId::Case, "Case Study", &[64, 66], 125))
        .await
        .expect("append");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Case Study"), "missing category in {html}");
    assert!(html.contains("Score: 65%"), "missing score in {html}");
    assert!(html.contains("Duration: 2:05"), "missing duration in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::History);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No interviews yet."), "missing empty state in {html}");
}

struct FailingRepo;

#[async_trait::async_trait]
impl InterviewHistoryRepository for FailingRepo {
    async fn append_interview(&self, _record: &CompletedInterview) -> Result<i64, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_interviews(&self) -> Result<Vec<InterviewRow>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn get_interview(&self, _id: i64) -> Result<CompletedInterview, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let mut harness =
        setup_view_harness_with_repo(ViewKind::Home, Storage::in_memory(), Arc::new(FailingRepo));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn interview_view_smoke_lists_categories() {
    let mut harness = setup_view_harness(ViewKind::Interview);
    harness.settle().await;
    let html = harness.render();
    for name in ["Behavioral Interview", "Technical Interview", "HR Interview", "Case Study"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(html.contains("💻"), "missing icon in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn interview_view_smoke_validates_then_scores() {
    let mut harness = setup_view_harness(ViewKind::Interview);
    harness.settle().await;

    dispatch(&harness, InterviewIntent::SelectCategory(CategoryId::Technical));
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing progress in {html}");
    assert!(html.contains("0:00"), "missing timer in {html}");
    assert!(html.contains("Tips:"), "missing tips in {html}");

    dispatch(&harness, InterviewIntent::Submit);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains(EMPTY_ANSWER_MESSAGE), "missing validation in {html}");

    set_draft(&harness, "I would profile first and then cache hot reads");
    dispatch(&harness, InterviewIntent::Submit);
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains(EMPTY_ANSWER_MESSAGE), "stale validation in {html}");
    assert!(html.contains("70"), "missing score in {html}");
    assert!(html.contains("/100"), "missing score label in {html}");
    assert!(html.contains("Next Question"), "missing next button in {html}");

    dispatch(&harness, InterviewIntent::Next);
    for _ in 0..4 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Question 2 of 5"), "did not advance in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn interview_view_smoke_completes_and_saves() {
    let mut harness = setup_view_harness(ViewKind::Interview);
    harness.settle().await;

    dispatch(&harness, InterviewIntent::SelectCategory(CategoryId::Technical));
    harness.drive_async().await;
    for _ in 0..5 {
        set_draft(&harness, "I would profile first and then cache hot reads");
        dispatch(&harness, InterviewIntent::Submit);
        harness.drive_async().await;
        dispatch(&harness, InterviewIntent::Next);
        for _ in 0..4 {
            harness.drive_async().await;
        }
    }

    let html = harness.render();
    assert!(html.contains("Interview Complete!"), "missing completion in {html}");
    assert!(html.contains("71%"), "missing average in {html}");
    assert!(html.contains("Good Job!"), "missing band in {html}");
    assert!(html.contains("Start Another Interview"), "missing restart in {html}");

    let rows = harness.storage.interviews.list_interviews().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.average_score().value(), 71);

    dispatch(&harness, InterviewIntent::Back);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Start Your Interview"), "did not return to start in {html}");
}

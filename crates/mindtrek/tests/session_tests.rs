use anyhow::{anyhow, Result};
use async_trait::async_trait;
use mindtrek::analysis::{self, AnalysisRecord};
use mindtrek::error::SessionError;
use mindtrek::service::AnalysisService;
use mindtrek::session::{
  IdeaSession, Notice, NoticeLevel, Section, SubmitOutcome, FAILURE_NOTICE, SUCCESS_NOTICE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// Mock analysis service that records what it was asked
struct MockAnalysis {
  calls: AtomicUsize,
  ideas: Mutex<Vec<String>>,
  gate: Option<Arc<Notify>>,
  failure: Option<String>,
}

impl MockAnalysis {
  fn new() -> Self {
    Self { calls: AtomicUsize::new(0), ideas: Mutex::new(Vec::new()), gate: None, failure: None }
  }

  // Each call waits for a permit on `gate` before answering
  fn gated(gate: Arc<Notify>) -> Self {
    Self { gate: Some(gate), ..Self::new() }
  }

  fn failing(message: &str) -> Self {
    Self { failure: Some(message.to_string()), ..Self::new() }
  }

  fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  fn ideas(&self) -> Vec<String> {
    self.ideas.lock().unwrap().clone()
  }
}

#[async_trait]
impl AnalysisService for MockAnalysis {
  async fn analyze(&self, idea: &str) -> Result<AnalysisRecord> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    self.ideas.lock().unwrap().push(idea.to_string());

    if let Some(gate) = &self.gate {
      gate.notified().await;
    }

    match &self.failure {
      Some(message) => Err(anyhow!(message.clone())),
      None => Ok(analysis::analyze(idea, &mut StdRng::seed_from_u64(1))?),
    }
  }
}

async fn wait_until_loading(session: &IdeaSession) {
  while !session.snapshot().await.is_loading {
    tokio::task::yield_now().await;
  }
}

#[tokio::test]
async fn test_successful_submit_stores_result() {
  let service = Arc::new(MockAnalysis::new());
  let session = IdeaSession::new(service.clone());

  session.set_idea_text("  A dog walking app  ").await;
  assert_eq!(session.submit().await, SubmitOutcome::Completed);

  let state = session.snapshot().await;
  assert!(state.is_submitted);
  assert!(!state.is_loading);
  assert_eq!(state.active_section, Section::Roadmap);
  assert!(state.result.unwrap().idea_summary.contains("dog walking"));

  // The service sees the trimmed idea
  assert_eq!(service.ideas(), vec!["A dog walking app".to_string()]);
  assert_eq!(
    session.drain_notices().await,
    vec![Notice { level: NoticeLevel::Success, message: SUCCESS_NOTICE.to_string() }]
  );
  assert!(session.drain_notices().await.is_empty());
}

#[tokio::test]
async fn test_blank_submit_is_rejected_without_calling_service() {
  let service = Arc::new(MockAnalysis::new());
  let session = IdeaSession::new(service.clone());

  for blank in ["", "   ", "\n\t"] {
    session.set_idea_text(blank).await;
    assert_eq!(session.submit().await, SubmitOutcome::Rejected(SessionError::EmptyIdea));
  }

  assert_eq!(service.calls(), 0);
  let state = session.snapshot().await;
  assert!(!state.is_loading);
  assert!(!state.is_submitted);
  assert!(state.result.is_none());

  let notices = session.drain_notices().await;
  assert_eq!(notices.len(), 3);
  assert!(notices.iter().all(|notice| notice.level == NoticeLevel::Error
    && notice.message == "Please enter an idea before submitting"));
}

#[tokio::test]
async fn test_failed_submit_returns_to_idle() {
  let service = Arc::new(MockAnalysis::failing("connection refused"));
  let session = IdeaSession::new(service.clone());

  session.set_idea_text("A dog walking app").await;
  assert_eq!(
    session.submit().await,
    SubmitOutcome::Failed(SessionError::request("connection refused"))
  );

  let state = session.snapshot().await;
  assert!(!state.is_loading);
  assert!(!state.is_submitted);
  assert!(state.result.is_none());
  assert_eq!(state.idea_text, "A dog walking app");
  assert_eq!(
    session.drain_notices().await,
    vec![Notice { level: NoticeLevel::Error, message: FAILURE_NOTICE.to_string() }]
  );

  // A retry is allowed after a failure
  session.submit().await;
  assert_eq!(service.calls(), 2);
}

#[tokio::test]
async fn test_submit_while_loading_is_ignored() {
  let gate = Arc::new(Notify::new());
  let service = Arc::new(MockAnalysis::gated(gate.clone()));
  let session = IdeaSession::new(service.clone());
  session.set_idea_text("A dog walking app").await;

  let first = tokio::spawn({
    let session = session.clone();
    async move { session.submit().await }
  });
  wait_until_loading(&session).await;

  assert_eq!(session.submit().await, SubmitOutcome::Ignored);
  assert_eq!(session.submit().await, SubmitOutcome::Ignored);

  gate.notify_one();
  assert_eq!(first.await.unwrap(), SubmitOutcome::Completed);
  assert_eq!(service.calls(), 1);
}

#[tokio::test]
async fn test_reset_restores_initial_form() {
  let session = IdeaSession::new(Arc::new(MockAnalysis::new()));
  session.set_idea_text("A dog walking app").await;
  session.submit().await;
  session.set_active_section(Section::Launch).await;

  session.reset().await;

  let state = session.snapshot().await;
  assert!(state.idea_text.is_empty());
  assert!(!state.is_submitted);
  assert!(state.result.is_none());
  assert_eq!(state.active_section, Section::Roadmap);
}

#[tokio::test]
async fn test_reset_while_loading_abandons_the_response() {
  let gate = Arc::new(Notify::new());
  let session = IdeaSession::new(Arc::new(MockAnalysis::gated(gate.clone())));
  session.set_idea_text("A dog walking app").await;

  let first = tokio::spawn({
    let session = session.clone();
    async move { session.submit().await }
  });
  wait_until_loading(&session).await;

  session.reset().await;
  gate.notify_one();
  assert_eq!(first.await.unwrap(), SubmitOutcome::Abandoned);

  let state = session.snapshot().await;
  assert!(!state.is_loading);
  assert!(!state.is_submitted);
  assert!(state.result.is_none());
  assert!(session.drain_notices().await.is_empty());
}

#[tokio::test]
async fn test_active_section_switches_tabs() {
  let session = IdeaSession::new(Arc::new(MockAnalysis::new()));
  for section in Section::ALL {
    session.set_active_section(section).await;
    assert_eq!(session.snapshot().await.active_section, section);
  }
}

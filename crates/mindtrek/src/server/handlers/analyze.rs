//! Idea analysis endpoint

use axum::{
  body::Bytes,
  extract::{Extension, State},
  response::Json,
};
use std::sync::Arc;

use crate::analysis::{self, AnalysisRecord};
use crate::error::AnalysisError;
use crate::server::{
  middleware::RequestContext,
  state::AppState,
  store::{IdeaStore, StoredIdea},
  types::AnalyzeRequest,
};

const COMPONENT: &str = "validate-idea";

/// POST /validate-idea - Analyze an idea and persist the result
///
/// The body is parsed as JSON whatever its `Content-Type`. The response does
/// not wait for the store: the row is written by a background task whose
/// failures only reach the daemon log.
pub async fn validate_idea(
  State(state): State<AppState>,
  Extension(context): Extension<RequestContext>,
  body: Bytes,
) -> Result<Json<AnalysisRecord>, AnalysisError> {
  let request = match serde_json::from_slice::<AnalyzeRequest>(&body) {
    Ok(request) => request,
    Err(e) => {
      let err = AnalysisError::internal(e.to_string());
      context.log_error(&format!("Error processing idea: {err:?}"), COMPONENT).await;
      return Err(err);
    }
  };

  let idea = request.idea.unwrap_or_default();
  // ThreadRng is !Send, so it must not live across an await
  let analyzed = analysis::analyze(&idea, &mut rand::thread_rng());
  let record = match analyzed {
    Ok(record) => record,
    Err(err) => {
      context.log_warn(&format!("Rejected idea: {err}"), COMPONENT).await;
      return Err(err);
    }
  };

  context.log_info(&format!("Processing idea: {}", idea.trim()), COMPONENT).await;

  persist_in_background(state.store.clone(), context, StoredIdea::completed(idea, record.clone()));

  Ok(Json(record))
}

fn persist_in_background(store: Arc<dyn IdeaStore>, context: RequestContext, idea: StoredIdea) {
  tokio::spawn(async move {
    match store.insert(&idea).await {
      Ok(()) => context.log_success(&format!("Stored idea analysis {}", idea.id), COMPONENT).await,
      Err(e) => context.log_error(&format!("Error saving idea analysis: {e}"), COMPONENT).await,
    }
  });
}

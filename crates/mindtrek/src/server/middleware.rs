//! Request context and middleware for the REST API
//!
//! Every request gets a [`RequestContext`] in its extensions: a request id,
//! the method and path, and a handle to the daemon log. Start and completion
//! of each request are written to the log with that context attached.

use axum::{
  extract::{Request, State},
  http::{header::USER_AGENT, Method, Uri},
  middleware::Next,
  response::Response,
};
use bentley::daemon_logs::{DaemonLogs, LogContext};
use bentley::Level;
use std::time::Instant;
use uuid::Uuid;

use crate::server::state::AppState;

const HTTP_COMPONENT: &str = "http-request";

/// Request context injected into every handler
#[derive(Clone)]
pub struct RequestContext {
  pub request_id: Uuid,
  pub method: Method,
  pub uri: Uri,
  pub user_agent: Option<String>,
  pub logger: DaemonLogs,
}

impl RequestContext {
  pub fn new(method: Method, uri: Uri, user_agent: Option<String>, logger: DaemonLogs) -> Self {
    Self { request_id: Uuid::new_v4(), method, uri, user_agent, logger }
  }

  pub async fn log_info(&self, message: &str, component: &str) {
    self.log(Level::Info, message, component, None, None).await;
  }

  pub async fn log_success(&self, message: &str, component: &str) {
    self.log(Level::Success, message, component, None, None).await;
  }

  pub async fn log_warn(&self, message: &str, component: &str) {
    self.log(Level::Warn, message, component, None, None).await;
  }

  pub async fn log_error(&self, message: &str, component: &str) {
    self.log(Level::Error, message, component, None, None).await;
  }

  async fn log(
    &self,
    level: Level,
    message: &str,
    component: &str,
    status_code: Option<u16>,
    duration_ms: Option<f64>,
  ) {
    let context = LogContext {
      request_id: Some(self.request_id.to_string()),
      method: Some(self.method.to_string()),
      path: Some(self.uri.path().to_string()),
      user_agent: self.user_agent.clone(),
      duration_ms,
      status_code,
    };

    self.logger.log_with_context(level, message, component, context).await;
  }

  pub async fn log_request_start(&self) {
    self.log(Level::Info, "Request started", HTTP_COMPONENT, None, None).await;
  }

  pub async fn log_request_complete(&self, status_code: u16, duration_ms: f64) {
    let level = if status_code >= 500 { Level::Error } else { Level::Info };
    self.log(level, "Request completed", HTTP_COMPONENT, Some(status_code), Some(duration_ms)).await;
  }
}

/// Inject a [`RequestContext`] and log the request lifecycle
pub async fn request_context_middleware(
  State(state): State<AppState>,
  mut request: Request,
  next: Next,
) -> Response {
  let user_agent =
    request.headers().get(USER_AGENT).and_then(|value| value.to_str().ok()).map(str::to_string);
  let context = RequestContext::new(
    request.method().clone(),
    request.uri().clone(),
    user_agent,
    state.logs.clone(),
  );

  let start_time = Instant::now();
  context.log_request_start().await;

  request.extensions_mut().insert(context.clone());
  let response = next.run(request).await;

  let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
  context.log_request_complete(response.status().as_u16(), duration_ms).await;

  response
}

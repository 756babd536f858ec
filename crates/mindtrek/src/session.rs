//! Idea session controller
//!
//! Holds what the view layer renders: the idea being typed, the loading and
//! submitted flags, the last analysis and which result tab is open. The
//! session is a cheap-to-clone handle, so the view can keep one copy while a
//! submission runs on another.
//!
//! ```text
//! Idle --submit--> Loading --ok--> Submitted --reset--> Idle
//!                     \--err--> Idle
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::analysis::AnalysisRecord;
use crate::error::SessionError;
use crate::service::AnalysisService;

pub const SUCCESS_NOTICE: &str = "Idea analysis complete!";
pub const FAILURE_NOTICE: &str = "Something went wrong. Please try again.";

/// Result tabs of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
  #[default]
  Roadmap,
  Wireframe,
  Business,
  Start,
  Launch,
}

impl Section {
  pub const ALL: [Section; 5] =
    [Section::Roadmap, Section::Wireframe, Section::Business, Section::Start, Section::Launch];

  pub fn tag(&self) -> &'static str {
    match self {
      Section::Roadmap => "roadmap",
      Section::Wireframe => "wireframe",
      Section::Business => "business",
      Section::Start => "start",
      Section::Launch => "launch",
    }
  }

  pub fn title(&self) -> &'static str {
    match self {
      Section::Roadmap => "Roadmap",
      Section::Wireframe => "Wireframe",
      Section::Business => "Business Model",
      Section::Start => "How to Start",
      Section::Launch => "Launch Checklist",
    }
  }
}

impl fmt::Display for Section {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.tag())
  }
}

impl FromStr for Section {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Section::ALL
      .into_iter()
      .find(|section| section.tag() == s.trim().to_ascii_lowercase())
      .ok_or_else(|| {
        let tags: Vec<&str> = Section::ALL.iter().map(Section::tag).collect();
        format!("unknown section '{s}' (expected one of: {})", tags.join(", "))
      })
  }
}

/// Snapshot of everything the view layer renders
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
  pub idea_text: String,
  pub is_loading: bool,
  pub is_submitted: bool,
  pub result: Option<AnalysisRecord>,
  pub active_section: Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
  Success,
  Error,
}

/// A user-facing message raised by a session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub level: NoticeLevel,
  pub message: String,
}

/// What a call to [`IdeaSession::submit`] did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
  /// The analysis was stored and the session is now submitted
  Completed,
  /// Another submission was already in flight; nothing happened
  Ignored,
  /// The idea was blank; the service was not called
  Rejected(SessionError),
  /// The service call failed; the session is back to idle
  Failed(SessionError),
  /// The session was reset while the request was in flight; its result was dropped
  Abandoned,
}

struct Inner {
  state: SessionState,
  notices: Vec<Notice>,
  // Bumped by reset so late completions can tell they are stale
  generation: u64,
}

impl Inner {
  fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
    self.notices.push(Notice { level, message: message.into() });
  }
}

/// Shared handle to one idea session
#[derive(Clone)]
pub struct IdeaSession {
  inner: Arc<Mutex<Inner>>,
  service: Arc<dyn AnalysisService>,
}

impl IdeaSession {
  pub fn new(service: Arc<dyn AnalysisService>) -> Self {
    let inner = Inner { state: SessionState::default(), notices: Vec::new(), generation: 0 };
    Self { inner: Arc::new(Mutex::new(inner)), service }
  }

  pub async fn snapshot(&self) -> SessionState {
    self.inner.lock().await.state.clone()
  }

  /// Take every notice raised since the last call
  pub async fn drain_notices(&self) -> Vec<Notice> {
    std::mem::take(&mut self.inner.lock().await.notices)
  }

  pub async fn set_idea_text(&self, text: impl Into<String>) {
    self.inner.lock().await.state.idea_text = text.into();
  }

  pub async fn set_active_section(&self, section: Section) {
    self.inner.lock().await.state.active_section = section;
  }

  /// Submit the current idea text for analysis
  ///
  /// At most one submission runs at a time; a call made while another is
  /// loading returns [`SubmitOutcome::Ignored`] without touching the service.
  pub async fn submit(&self) -> SubmitOutcome {
    let (idea, generation) = {
      let mut inner = self.inner.lock().await;
      if inner.state.is_loading {
        return SubmitOutcome::Ignored;
      }

      let idea = inner.state.idea_text.trim().to_string();
      if idea.is_empty() {
        let err = SessionError::EmptyIdea;
        inner.notify(NoticeLevel::Error, err.to_string());
        return SubmitOutcome::Rejected(err);
      }

      inner.state.is_loading = true;
      (idea, inner.generation)
    };

    // The lock is released while the request is in flight
    let response = self.service.analyze(&idea).await;

    let mut inner = self.inner.lock().await;
    inner.state.is_loading = false;

    if inner.generation != generation {
      tracing::debug!("Dropping analysis for a session that was reset mid-request");
      return SubmitOutcome::Abandoned;
    }

    match response {
      Ok(record) => {
        inner.state.result = Some(record);
        inner.state.is_submitted = true;
        inner.notify(NoticeLevel::Success, SUCCESS_NOTICE);
        SubmitOutcome::Completed
      }
      Err(e) => {
        tracing::warn!(error = %e, "Idea analysis request failed");
        inner.notify(NoticeLevel::Error, FAILURE_NOTICE);
        SubmitOutcome::Failed(SessionError::request(e.to_string()))
      }
    }
  }

  /// Return to the initial form: no text, no result, roadmap tab
  pub async fn reset(&self) {
    let mut inner = self.inner.lock().await;
    inner.state.idea_text.clear();
    inner.state.is_submitted = false;
    inner.state.result = None;
    inner.state.active_section = Section::Roadmap;
    inner.generation += 1;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_section_parses_known_tags() {
    assert_eq!("roadmap".parse::<Section>().unwrap(), Section::Roadmap);
    assert_eq!(" Business ".parse::<Section>().unwrap(), Section::Business);
    assert_eq!("launch".parse::<Section>().unwrap(), Section::Launch);
  }

  #[test]
  fn test_section_rejects_unknown_tags() {
    let err = "pricing".parse::<Section>().unwrap_err();
    assert!(err.contains("roadmap, wireframe, business, start, launch"));
  }

  #[test]
  fn test_default_state_is_initial_form() {
    let state = SessionState::default();
    assert!(state.idea_text.is_empty());
    assert!(!state.is_loading);
    assert!(!state.is_submitted);
    assert!(state.result.is_none());
    assert_eq!(state.active_section, Section::Roadmap);
  }
}

//! Error types for the analysis service, its store and the idea session

use thiserror::Error;

/// Failures of `analyze`, surfaced to HTTP callers as 400 / 500 bodies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
  #[error("No idea provided")]
  InvalidInput,

  #[error("Internal Server Error: {details}")]
  Internal { details: String },
}

impl AnalysisError {
  pub fn internal(details: impl Into<String>) -> Self {
    Self::Internal { details: details.into() }
  }
}

/// Failures writing a record to the idea store
#[derive(Error, Debug)]
pub enum PersistenceError {
  #[error("Failed to write idea store: {0}")]
  Io(#[from] std::io::Error),

  #[error("Failed to serialize stored idea: {0}")]
  Serialize(#[from] serde_json::Error),
}

/// Failures reported by the idea session to its view layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
  #[error("Please enter an idea before submitting")]
  EmptyIdea,

  #[error("Analysis request failed: {message}")]
  Request { message: String },
}

impl SessionError {
  pub fn request(message: impl Into<String>) -> Self {
    Self::Request { message: message.into() }
  }
}

//! REST API types

use axum::{
  http::StatusCode,
  response::{IntoResponse, Json, Response},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AnalysisError;

// Analysis Endpoint
// =================

/// Body of `POST /validate-idea`
#[derive(Debug, Serialize, Deserialize, JsonSchema, Default)]
pub struct AnalyzeRequest {
  /// Free-text product idea
  #[serde(default)]
  pub idea: Option<String>,
}

/// Error body of `POST /validate-idea`
#[derive(Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ErrorBody {
  pub error: String,

  #[serde(skip_serializing_if = "Option::is_none", default)]
  pub details: Option<String>,
}

impl IntoResponse for AnalysisError {
  fn into_response(self) -> Response {
    let (status, body) = match self {
      AnalysisError::InvalidInput => (
        StatusCode::BAD_REQUEST,
        ErrorBody { error: "No idea provided".to_string(), details: None },
      ),
      AnalysisError::Internal { details } => (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody { error: "Internal Server Error".to_string(), details: Some(details) },
      ),
    };

    (status, Json(body)).into_response()
  }
}

// Envelope for the operational endpoints
// ======================================

/// Response wrapper for status, version and logs endpoints
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BaseResponse<T> {
  /// Server version that produced the response
  pub version: String,

  /// Transaction ID for logging correlation
  pub transaction_id: Uuid,

  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub errors: Vec<ApiError>,

  #[serde(flatten)]
  pub data: T,
}

/// API error information
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiError {
  /// Error key, unique to the error source
  pub key: String,

  /// Human readable error message
  pub message: String,
}

impl<T> BaseResponse<T> {
  pub fn success(data: T, transaction_id: Uuid) -> Self {
    Self { version: env!("CARGO_PKG_VERSION").to_string(), transaction_id, errors: Vec::new(), data }
  }

  pub fn error(errors: Vec<ApiError>, transaction_id: Uuid) -> BaseResponse<()> {
    BaseResponse { version: env!("CARGO_PKG_VERSION").to_string(), transaction_id, errors, data: () }
  }
}

impl ApiError {
  pub fn new(key: &str, message: &str) -> Self {
    Self { key: key.to_string(), message: message.to_string() }
  }
}

// Status/Version Endpoints
// ========================

/// Response for /status
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusResponse {
  pub status: String,
  /// Directory holding the idea store and server logs
  pub data_dir: String,
  /// Daemon log file served by /logs
  pub log_file: String,
}

/// Response for /version
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct VersionResponse {
  pub latest: String,
}

// Logs Endpoint
// =============

/// Query string for /logs
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LogsQuery {
  pub limit: Option<usize>,
  /// A level name, or "all"
  pub level: Option<String>,
}

/// Response for /logs
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LogsResponse {
  pub logs: Vec<LogEntry>,
}

pub type LogEntry = bentley::daemon_logs::LogEntry;

#[cfg(test)]
mod tests {
  use super::*;
  use axum::body::to_bytes;

  async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  #[tokio::test]
  async fn test_invalid_input_is_400_without_details() {
    let response = AnalysisError::InvalidInput.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, serde_json::json!({ "error": "No idea provided" }));
  }

  #[tokio::test]
  async fn test_internal_is_500_with_details() {
    let response = AnalysisError::internal("boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
      body_json(response).await,
      serde_json::json!({ "error": "Internal Server Error", "details": "boom" })
    );
  }

  #[test]
  fn test_base_response_flattens_data() {
    let response = BaseResponse::success(
      VersionResponse { latest: "1.0.0".to_string() },
      Uuid::nil(),
    );
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["latest"], "1.0.0");
    assert!(json.get("errors").is_none());
  }
}

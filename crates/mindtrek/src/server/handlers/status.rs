//! Status, version and schema endpoint handlers

use axum::{extract::State, response::Json};
use schemars::schema::RootSchema;
use uuid::Uuid;

use crate::analysis::AnalysisRecord;
use crate::server::{
  state::AppState,
  types::{BaseResponse, StatusResponse, VersionResponse},
};

/// GET /status - Health check endpoint
pub async fn status(State(state): State<AppState>) -> Json<BaseResponse<StatusResponse>> {
  let response = StatusResponse {
    status: "healthy".to_string(),
    data_dir: state.data_dir.to_string_lossy().to_string(),
    log_file: state.logs.log_file_path().await.to_string_lossy().to_string(),
  };

  Json(BaseResponse::success(response, Uuid::new_v4()))
}

/// GET /version - Returns current API version
pub async fn version() -> Json<BaseResponse<VersionResponse>> {
  let response = VersionResponse { latest: env!("CARGO_PKG_VERSION").to_string() };
  Json(BaseResponse::success(response, Uuid::new_v4()))
}

/// GET /schema - JSON schema of the analysis record
pub async fn schema() -> Json<RootSchema> {
  Json(schemars::schema_for!(AnalysisRecord))
}

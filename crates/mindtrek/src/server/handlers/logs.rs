//! Logs endpoint handler

use axum::{
  extract::{Extension, Query},
  http::StatusCode,
  response::Json,
};
use bentley::Level;
use uuid::Uuid;

use crate::server::{
  middleware::RequestContext,
  types::{ApiError, BaseResponse, LogsQuery, LogsResponse},
};

const COMPONENT: &str = "logs-api";
const DEFAULT_LIMIT: usize = 100;

type LogsResult = Result<Json<BaseResponse<LogsResponse>>, (StatusCode, Json<BaseResponse<()>>)>;

/// GET /logs?limit=&level= - Most recent daemon log entries
pub async fn get_logs(
  Extension(context): Extension<RequestContext>,
  Query(query): Query<LogsQuery>,
) -> LogsResult {
  let transaction_id = Uuid::new_v4();

  let level = match query.level.as_deref().map(str::trim) {
    None | Some("") | Some("all") => None,
    Some(name) => match name.parse::<Level>() {
      Ok(level) => Some(level),
      Err(e) => {
        let error = ApiError::new("invalid_level", &e);
        return Err((
          StatusCode::BAD_REQUEST,
          Json(BaseResponse::<()>::error(vec![error], transaction_id)),
        ));
      }
    },
  };

  match context.logger.get_logs(Some(query.limit.unwrap_or(DEFAULT_LIMIT)), level).await {
    Ok(logs) => Ok(Json(BaseResponse::success(LogsResponse { logs }, transaction_id))),
    Err(e) => {
      context.log_error(&format!("Failed to read logs: {e}"), COMPONENT).await;
      let error = ApiError::new("logs_read_failed", &format!("Failed to read logs: {e}"));
      Err((
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(BaseResponse::<()>::error(vec![error], transaction_id)),
      ))
    }
  }
}

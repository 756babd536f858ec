//! Axum router configuration for all endpoints

use axum::{
  http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderName, Method,
  },
  middleware,
  routing::{get, post},
  Router,
};
use tower::ServiceBuilder;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::server::{
  handlers::{analyze, logs, status},
  middleware::request_context_middleware,
  state::AppState,
};

/// Browser clients send these alongside the idea
const CLIENT_INFO: HeaderName = HeaderName::from_static("x-client-info");
const API_KEY: HeaderName = HeaderName::from_static("apikey");

/// Any origin may call the API with the headers browser clients send
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([AUTHORIZATION, CLIENT_INFO, API_KEY, CONTENT_TYPE])
}

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    // Status and version endpoints
    .route("/status", get(status::status))
    .route("/version", get(status::version))
    .route("/schema", get(status::schema))
    // Logs endpoint
    .route("/logs", get(logs::get_logs))
    // Analysis endpoint
    .route("/validate-idea", post(analyze::validate_idea))
    .layer(middleware::from_fn_with_state(state.clone(), request_context_middleware))
    .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors_layer()))
    .with_state(state)
}

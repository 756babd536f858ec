//! HTTP client for the mindtrek REST API
//!
//! Lets the CLI drive an idea session against a running server instead of
//! analyzing in-process.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tokio::time::timeout;

use crate::analysis::AnalysisRecord;
use crate::config::ClientConfig;
use crate::server::types::{AnalyzeRequest, BaseResponse, ErrorBody, LogsResponse, StatusResponse};
use crate::service::AnalysisService;

/// HTTP client for the mindtrek REST API
pub struct MindtrekClient {
  client: Client,
  config: ClientConfig,
}

impl MindtrekClient {
  /// Create a new client with custom configuration
  pub fn with_config(config: ClientConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

    Ok(Self { client, config })
  }

  pub fn base_url(&self) -> &str {
    &self.config.base_url
  }

  /// Submit an idea to `POST /validate-idea`
  pub async fn validate_idea(&self, idea: &str) -> Result<AnalysisRecord> {
    let request = AnalyzeRequest { idea: Some(idea.to_string()) };

    let url = format!("{}/validate-idea", self.config.base_url);
    let response = timeout(
      Duration::from_secs(self.config.timeout_secs),
      self.client.post(&url).json(&request).send(),
    )
    .await??;

    if !response.status().is_success() {
      return Err(error_from_response(response).await);
    }

    Ok(response.json().await?)
  }

  /// Check that the server is reachable
  pub async fn health_check(&self) -> Result<BaseResponse<StatusResponse>> {
    let url = format!("{}/status", self.config.base_url);
    let response = timeout(
      Duration::from_secs(5), // Shorter timeout for health check
      self.client.get(&url).send(),
    )
    .await??;

    if !response.status().is_success() {
      return Err(anyhow!("Server health check failed: {}", response.status()));
    }

    Ok(response.json().await?)
  }

  /// Get server logs
  pub async fn get_logs(
    &self,
    limit: usize,
    level: Option<&str>,
  ) -> Result<BaseResponse<LogsResponse>> {
    let url = format!("{}/logs", self.config.base_url);
    let mut query = vec![("limit", limit.to_string())];
    if let Some(level) = level {
      query.push(("level", level.to_string()));
    }

    let response = timeout(
      Duration::from_secs(self.config.timeout_secs),
      self.client.get(&url).query(&query).send(),
    )
    .await??;

    if !response.status().is_success() {
      return Err(anyhow!("Failed to get logs: HTTP {}", response.status()));
    }

    Ok(response.json().await?)
  }
}

#[async_trait]
impl AnalysisService for MindtrekClient {
  async fn analyze(&self, idea: &str) -> Result<AnalysisRecord> {
    self.validate_idea(idea).await
  }
}

/// Surface the server's `{ "error", "details" }` body when there is one
async fn error_from_response(response: Response) -> anyhow::Error {
  let status = response.status();
  let text = match response.text().await {
    Ok(text) => text,
    Err(e) => return anyhow!("Idea analysis failed: HTTP {} ({})", status, e),
  };

  match serde_json::from_str::<ErrorBody>(&text) {
    Ok(ErrorBody { error, details: Some(details) }) => {
      anyhow!("Idea analysis failed: {} ({})", error, details)
    }
    Ok(ErrorBody { error, details: None }) => anyhow!("Idea analysis failed: {}", error),
    Err(_) => anyhow!("Idea analysis failed: HTTP {} {}", status, text),
  }
}

/// Get the configured client (checks environment variables)
pub fn get_client() -> Result<MindtrekClient> {
  MindtrekClient::with_config(ClientConfig::from_env())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_unreachable_server_is_an_error() {
    let client = MindtrekClient::with_config(ClientConfig {
      base_url: "http://127.0.0.1:9".to_string(),
      timeout_secs: 2,
    })
    .unwrap();

    assert!(client.analyze("A dog walking app").await.is_err());
    assert!(client.health_check().await.is_err());
  }
}

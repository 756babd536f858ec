//! Environment-driven configuration for the client and the server

use anyhow::{anyhow, Result};
use dirs::home_dir;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const IDEAS_FILE: &str = "ideas.jsonl";
const SERVER_LOGS_FILE: &str = "server.logs.jsonl";

/// Data directory (`$MINDTREK_ROOT`, or `~/.mindtrek`)
pub fn get_mindtrek_root() -> Result<PathBuf> {
  if let Ok(custom_root) = std::env::var("MINDTREK_ROOT") {
    return Ok(PathBuf::from(custom_root));
  }

  let home = home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
  Ok(home.join(".mindtrek"))
}

/// Configuration for the HTTP analysis client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
  /// Base URL of the analysis server (e.g., "http://localhost:3000")
  pub base_url: String,
  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self { base_url: DEFAULT_SERVER_URL.to_string(), timeout_secs: DEFAULT_TIMEOUT_SECS }
  }
}

impl ClientConfig {
  /// Read `MINDTREK_SERVER_URL` and `MINDTREK_TIMEOUT_SECS`, falling back to defaults
  pub fn from_env() -> Self {
    let base_url = std::env::var("MINDTREK_SERVER_URL")
      .map(|url| url.trim_end_matches('/').to_string())
      .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

    let timeout_secs = std::env::var("MINDTREK_TIMEOUT_SECS")
      .ok()
      .and_then(|secs| secs.parse().ok())
      .filter(|secs| *secs > 0)
      .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Self { base_url, timeout_secs }
  }
}

/// Configuration for the analysis server
#[derive(Debug, Clone)]
pub struct ServerConfig {
  pub bind: SocketAddr,
  /// Holds the idea store and the daemon log file
  pub data_dir: PathBuf,
}

impl ServerConfig {
  pub fn new(bind: SocketAddr) -> Result<Self> {
    Ok(Self { bind, data_dir: get_mindtrek_root()? })
  }

  pub fn ideas_path(&self) -> PathBuf {
    self.data_dir.join(IDEAS_FILE)
  }

  pub fn logs_path(&self) -> PathBuf {
    self.data_dir.join(SERVER_LOGS_FILE)
  }
}

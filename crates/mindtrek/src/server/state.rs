//! Shared handler state

use bentley::daemon_logs::DaemonLogs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::server::store::IdeaStore;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn IdeaStore>,
  pub logs: DaemonLogs,
  /// Reported by /status
  pub data_dir: PathBuf,
}

impl AppState {
  pub fn new(store: Arc<dyn IdeaStore>, logs: DaemonLogs, data_dir: PathBuf) -> Self {
    Self { store, logs, data_dir }
  }
}

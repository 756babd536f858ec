//! Persistent daemon logs
//!
//! Append-only JSONL file shared by every handle of a running server. Each
//! entry may carry request context (id, method, path, status, duration) so
//! that the `/logs` endpoint can show what happened to a given call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

#[cfg(feature = "schemars")]
use schemars::JsonSchema;

use crate::Level;

/// Request context information for logs
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct LogContext {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request_id: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub method: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_agent: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration_ms: Option<f64>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub status_code: Option<u16>,
}

/// A structured log entry
#[derive(Debug, Serialize, Deserialize, Clone)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
pub struct LogEntry {
  pub timestamp: DateTime<Utc>,
  pub level: Level,
  pub message: String,
  pub component: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub context: Option<LogContext>,
}

struct LogFile {
  path: PathBuf,
  silent: bool,
}

/// Thread-safe disk-backed log storage; clones share the same file
#[derive(Clone)]
pub struct DaemonLogs {
  inner: Arc<Mutex<LogFile>>,
}

impl LogFile {
  fn open(path: &Path, silent: bool) -> std::io::Result<Self> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }

    // Never truncate: earlier runs stay queryable
    if !path.exists() {
      File::create(path)?;
    }

    Ok(Self { path: path.to_path_buf(), silent })
  }

  fn append(&self, entry: &LogEntry) -> std::io::Result<()> {
    let line = serde_json::to_string(entry)
      .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
    writeln!(file, "{line}")?;
    file.flush()
  }

  fn read(&self, limit: Option<usize>, level: Option<Level>) -> std::io::Result<Vec<LogEntry>> {
    if !self.path.exists() {
      return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(&self.path)?);
    let mut entries = Vec::new();

    for line in reader.lines() {
      let line = line?;
      if line.trim().is_empty() {
        continue;
      }

      // Malformed lines are skipped rather than failing the whole query
      let Ok(entry) = serde_json::from_str::<LogEntry>(&line) else {
        continue;
      };

      if level.is_none_or(|wanted| entry.level == wanted) {
        entries.push(entry);
      }
    }

    // The file is append-only, so the newest N are its last N matches
    if let Some(limit) = limit {
      let skip = entries.len().saturating_sub(limit);
      entries.drain(..skip);
    }

    Ok(entries)
  }
}

impl DaemonLogs {
  /// Open (or create) a log file that also echoes to the console
  pub fn new<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
    Self::new_with_silent(path, false)
  }

  /// Open (or create) a log file; `silent` suppresses the console echo
  pub fn new_with_silent<P: AsRef<Path>>(path: P, silent: bool) -> std::io::Result<Self> {
    let file = LogFile::open(path.as_ref(), silent)?;
    Ok(Self { inner: Arc::new(Mutex::new(file)) })
  }

  /// Append an entry, reporting IO failures to the caller
  pub async fn append(
    &self,
    level: Level,
    message: &str,
    component: &str,
    context: Option<LogContext>,
  ) -> std::io::Result<()> {
    let entry = LogEntry {
      timestamp: Utc::now(),
      level,
      message: message.to_string(),
      component: component.to_string(),
      context,
    };

    let guard = self.inner.lock().await;
    guard.append(&entry)?;
    if !guard.silent {
      crate::emit(level, message);
    }
    Ok(())
  }

  /// Append an entry, ignoring IO failures
  pub async fn log(&self, level: Level, message: &str, component: &str) {
    let _ = self.append(level, message, component, None).await;
  }

  /// Append an entry with request context, ignoring IO failures
  pub async fn log_with_context(
    &self,
    level: Level,
    message: &str,
    component: &str,
    context: LogContext,
  ) {
    let _ = self.append(level, message, component, Some(context)).await;
  }

  pub async fn info(&self, message: &str, component: &str) {
    self.log(Level::Info, message, component).await;
  }

  pub async fn success(&self, message: &str, component: &str) {
    self.log(Level::Success, message, component).await;
  }

  pub async fn warn(&self, message: &str, component: &str) {
    self.log(Level::Warn, message, component).await;
  }

  pub async fn error(&self, message: &str, component: &str) {
    self.log(Level::Error, message, component).await;
  }

  /// Most recent entries (oldest first), optionally filtered by level
  pub async fn get_logs(
    &self,
    limit: Option<usize>,
    level: Option<Level>,
  ) -> std::io::Result<Vec<LogEntry>> {
    let guard = self.inner.lock().await;
    guard.read(limit, level)
  }

  pub async fn log_file_path(&self) -> PathBuf {
    self.inner.lock().await.path.clone()
  }
}

//! Append-only idea store
//!
//! One JSON line per analyzed idea: the wire fields of the analysis plus the
//! raw idea text and a status. Rows are only ever appended.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::analysis::AnalysisRecord;
use crate::error::PersistenceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
  Completed,
}

/// A persisted analysis row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredIdea {
  pub id: Uuid,
  pub created_at: DateTime<Utc>,
  /// The idea exactly as the caller sent it
  pub idea_text: String,
  #[serde(flatten)]
  pub analysis: AnalysisRecord,
  pub status: IdeaStatus,
}

impl StoredIdea {
  pub fn completed(idea_text: impl Into<String>, analysis: AnalysisRecord) -> Self {
    Self {
      id: Uuid::new_v4(),
      created_at: Utc::now(),
      idea_text: idea_text.into(),
      analysis,
      status: IdeaStatus::Completed,
    }
  }
}

/// Durable destination for analyzed ideas
#[async_trait]
pub trait IdeaStore: Send + Sync {
  async fn insert(&self, idea: &StoredIdea) -> Result<(), PersistenceError>;
}

/// JSONL file store; appends are serialised behind a lock
pub struct JsonlIdeaStore {
  path: PathBuf,
  write_lock: Mutex<()>,
}

impl JsonlIdeaStore {
  pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
    let path = path.as_ref().to_path_buf();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }

    Ok(Self { path, write_lock: Mutex::new(()) })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Every stored row in insertion order
  pub async fn load_all(&self) -> Result<Vec<StoredIdea>, PersistenceError> {
    let _guard = self.write_lock.lock().await;
    if !self.path.exists() {
      return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(&self.path)?);
    let mut ideas = Vec::new();
    for line in reader.lines() {
      let line = line?;
      if line.trim().is_empty() {
        continue;
      }
      ideas.push(serde_json::from_str(&line)?);
    }

    Ok(ideas)
  }
}

#[async_trait]
impl IdeaStore for JsonlIdeaStore {
  async fn insert(&self, idea: &StoredIdea) -> Result<(), PersistenceError> {
    let line = serde_json::to_string(idea)?;

    let _guard = self.write_lock.lock().await;
    let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
    writeln!(file, "{line}")?;
    file.flush()?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis;
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use tempfile::TempDir;

  fn sample(idea: &str) -> StoredIdea {
    let record = analysis::analyze(idea, &mut StdRng::seed_from_u64(42)).unwrap();
    StoredIdea::completed(idea, record)
  }

  #[tokio::test]
  async fn test_insert_appends_rows_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonlIdeaStore::open(temp_dir.path().join("ideas.jsonl")).unwrap();

    let first = sample("Dog walking app");
    let second = sample("Tax filing website");
    store.insert(&first).await.unwrap();
    store.insert(&second).await.unwrap();

    let rows = store.load_all().await.unwrap();
    assert_eq!(rows, vec![first, second]);
  }

  #[tokio::test]
  async fn test_rows_carry_wire_fields_and_status() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonlIdeaStore::open(temp_dir.path().join("nested").join("ideas.jsonl")).unwrap();

    store.insert(&sample("  Dog walking app ")).await.unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    let row: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(row["status"], "completed");
    assert_eq!(row["idea_text"], "  Dog walking app ");
    for field in ["uniqueness_score", "roadmap", "wireframe", "github_plan", "launch_checklist"] {
      assert!(row.get(field).is_some(), "missing {field}");
    }
  }

  #[tokio::test]
  async fn test_load_all_on_missing_file_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonlIdeaStore::open(temp_dir.path().join("ideas.jsonl")).unwrap();
    assert!(store.load_all().await.unwrap().is_empty());
  }
}

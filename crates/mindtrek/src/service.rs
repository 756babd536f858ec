//! The seam between the idea session and whatever performs the analysis

use anyhow::Result;
use async_trait::async_trait;

use crate::analysis::{self, AnalysisRecord};

/// Something that can turn an idea into an analysis record
#[async_trait]
pub trait AnalysisService: Send + Sync {
  async fn analyze(&self, idea: &str) -> Result<AnalysisRecord>;
}

/// In-process analysis with the thread RNG; nothing is persisted
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalAnalysis;

#[async_trait]
impl AnalysisService for LocalAnalysis {
  async fn analyze(&self, idea: &str) -> Result<AnalysisRecord> {
    Ok(analysis::analyze(idea, &mut rand::thread_rng())?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_local_analysis_produces_record() {
    let record = LocalAnalysis.analyze("A fitness tracking app").await.unwrap();
    assert_eq!(record.roadmap.len(), 15);
    assert!(record.business_model[0].contains("fitness enthusiasts"));
  }

  #[tokio::test]
  async fn test_local_analysis_rejects_blank_idea() {
    let err = LocalAnalysis.analyze("   ").await.unwrap_err();
    assert_eq!(err.to_string(), "No idea provided");
  }
}

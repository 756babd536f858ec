//! Idea analysis
//!
//! Turns a free-text product idea into an [`AnalysisRecord`]. Generation is
//! split in two: [`Blueprint::from_idea`] derives everything that depends only
//! on the idea text, and [`Blueprint::embellish`] fills the randomized fields
//! from a caller-supplied RNG.

pub mod cascade;
pub mod generator;
pub mod templates;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use cascade::Wireframe;
pub use generator::{analyze, summarize, Blueprint};

/// A published project that resembles the idea
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExistingProject {
  pub name: String,
  pub description: String,
  pub url: String,
  /// Percentage, 40 to 80
  pub similarity: u8,
}

/// Structured result of evaluating one idea
///
/// Field names are the wire names used by the HTTP API and the idea store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRecord {
  pub idea_summary: String,
  /// 70 to 100
  pub uniqueness_score: u8,
  /// 80 to 100
  pub feasibility_score: u8,
  pub existing_projects: Vec<ExistingProject>,
  pub innovative_twists: Vec<String>,
  pub roadmap: Vec<String>,
  /// Mermaid flowchart source
  pub wireframe: String,
  pub tech_stack: Vec<String>,
  pub business_model: Vec<String>,
  pub how_to_start: Vec<String>,
  pub github_plan: String,
  pub launch_checklist: Vec<String>,
}

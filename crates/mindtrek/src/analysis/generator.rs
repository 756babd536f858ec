//! Analysis record generation

use rand::Rng;

use super::cascade::{self, Wireframe};
use super::templates::*;
use super::{AnalysisRecord, ExistingProject};
use crate::error::AnalysisError;

/// Everything about an analysis that follows from the idea text alone
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
  /// Trimmed idea as submitted
  pub idea: String,
  pub idea_summary: String,
  pub wireframe: Wireframe,
  pub tech_stack: Vec<String>,
  pub target_users: &'static str,
  pub mentions_automation: bool,
  pub github_plan: String,
}

impl Blueprint {
  /// Derive the deterministic part of an analysis; blank ideas are rejected
  pub fn from_idea(idea: &str) -> Result<Self, AnalysisError> {
    let idea = idea.trim();
    if idea.is_empty() {
      return Err(AnalysisError::InvalidInput);
    }

    let lowered = idea.to_lowercase();
    let idea_summary = summarize(idea);
    let tech_stack = cascade::tech_stack(&lowered);
    let github_plan = github_plan(idea, &idea_summary, &tech_stack);

    Ok(Self {
      idea: idea.to_string(),
      idea_summary,
      wireframe: cascade::WIREFRAMES.select(&lowered),
      tech_stack,
      target_users: cascade::TARGET_USERS.select(&lowered),
      mentions_automation: lowered.contains("automat"),
      github_plan,
    })
  }

  /// Fill the randomized fields and produce the full record
  pub fn embellish<R: Rng + ?Sized>(self, rng: &mut R) -> AnalysisRecord {
    let existing_projects = vec![
      ExistingProject {
        name: project_name(&self.idea, rng),
        description: format!(
          "Similar to {}, but focuses on {}",
          self.idea,
          pick(rng, &PROJECT_FEATURES)
        ),
        url: PROJECT_URLS[0].to_string(),
        similarity: rng.gen_range(50..80),
      },
      ExistingProject {
        name: project_name(&self.idea, rng),
        description: format!("{} with additional {}", self.idea, pick(rng, &PROJECT_FEATURES)),
        url: PROJECT_URLS[1].to_string(),
        similarity: rng.gen_range(40..60),
      },
    ];

    let innovative_twists = vec![
      format!("Integrate AI to automatically {}", pick(rng, &IMPROVEMENTS)),
      format!("Add social features allowing users to {}", pick(rng, &SOCIAL_FEATURES)),
      format!("Create a marketplace where {}", pick(rng, &MARKETPLACE_FEATURES)),
    ];

    let business_model = vec![
      format!("Target Users: {}", self.target_users),
      format!("Value Proposition: {}", value_proposition(self.mentions_automation, rng)),
      format!("Revenue Stream: {}", pick(rng, &REVENUE_STREAMS)),
      format!("Marketing Strategy: {}", pick(rng, &MARKETING_STRATEGIES)),
      format!("Competitive Advantage: {}", pick(rng, &COMPETITIVE_ADVANTAGES)),
    ];

    AnalysisRecord {
      idea_summary: self.idea_summary,
      uniqueness_score: rng.gen_range(70..=100),
      feasibility_score: rng.gen_range(80..=100),
      existing_projects,
      innovative_twists,
      roadmap: to_strings(&ROADMAP),
      wireframe: self.wireframe.template().to_string(),
      tech_stack: self.tech_stack,
      business_model,
      how_to_start: to_strings(&HOW_TO_START),
      github_plan: self.github_plan,
      launch_checklist: to_strings(&LAUNCH_CHECKLIST),
    }
  }
}

/// Analyze an idea end to end
pub fn analyze<R: Rng + ?Sized>(idea: &str, rng: &mut R) -> Result<AnalysisRecord, AnalysisError> {
  Ok(Blueprint::from_idea(idea)?.embellish(rng))
}

/// One-line summary: article, optional "app for ", lowercased idea
///
/// The article agrees with whatever follows it, so "quantum widget" becomes
/// "an app for quantum widget" and "budget app" becomes "a budget app".
pub fn summarize(idea: &str) -> String {
  let lowered = idea.trim().to_lowercase();
  let body = if lowered.contains("app") { lowered } else { format!("app for {lowered}") };
  let article = if body.starts_with(['a', 'e', 'i', 'o', 'u']) { "an" } else { "a" };

  format!("{article} {body}")
}

fn github_plan(idea: &str, summary: &str, tech_stack: &[String]) -> String {
  format!(
    "# {title}

{idea}

## Project Structure
- /src
  - /components
  - /pages
  - /services
  - /hooks
  - /utils
  - /assets
  - /styles
- /docs
- /tests
- /public

## Tech Stack
{stack}

## Getting Started
1. Clone this repository
2. Install dependencies with `npm install`
3. Run development server with `npm run dev`
4. Open http://localhost:3000 to view it in the browser

## Contributing
We welcome contributions! Please see our contributing guide for details.
",
    title = capitalize(summary),
    stack = tech_stack.join("\n"),
  )
}

/// Random prefix plus a random idea word longer than three characters
fn project_name<R: Rng + ?Sized>(idea: &str, rng: &mut R) -> String {
  let words: Vec<&str> = idea.split_whitespace().filter(|word| word.chars().count() > 3).collect();
  let base = if words.is_empty() { "App" } else { words[rng.gen_range(0..words.len())] };

  format!("{}{}", pick(rng, &PROJECT_PREFIXES), capitalize(base))
}

fn value_proposition<R: Rng + ?Sized>(mentions_automation: bool, rng: &mut R) -> String {
  // Slot 0 is the automation pitch, the rest come from the fixed list
  match rng.gen_range(0..=VALUE_PROPOSITIONS.len()) {
    0 => format!(
      "Save time and increase efficiency by automating {}",
      if mentions_automation { "key processes" } else { "manual tasks" }
    ),
    n => VALUE_PROPOSITIONS[n - 1].to_string(),
  }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, candidates: &[&'static str]) -> &'static str {
  candidates[rng.gen_range(0..candidates.len())]
}

fn capitalize(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

fn to_strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn test_summarize_inserts_app_for() {
    assert_eq!(summarize("Quantum widget"), "an app for quantum widget");
    assert_eq!(summarize("  Dog walking  "), "an app for dog walking");
  }

  #[test]
  fn test_summarize_keeps_existing_app() {
    assert_eq!(summarize("Budget App for students"), "a budget app for students");
    assert_eq!(
      summarize("an app for farmers to detect crop diseases"),
      "an an app for farmers to detect crop diseases"
    );
  }

  #[test]
  fn test_blank_idea_is_invalid_input() {
    assert_eq!(Blueprint::from_idea(""), Err(AnalysisError::InvalidInput));
    assert_eq!(Blueprint::from_idea(" \t\n"), Err(AnalysisError::InvalidInput));
  }

  #[test]
  fn test_blueprint_is_deterministic() {
    let first = Blueprint::from_idea("A web platform for data teams").unwrap();
    let second = Blueprint::from_idea("A web platform for data teams").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.wireframe, Wireframe::Website);
  }

  #[test]
  fn test_github_plan_embeds_summary_idea_and_stack() {
    let blueprint = Blueprint::from_idea("Recipe sharing website").unwrap();

    assert!(blueprint.github_plan.starts_with("# An app for recipe sharing website\n"));
    assert!(blueprint.github_plan.contains("\nRecipe sharing website\n"));
    for line in &blueprint.tech_stack {
      assert!(blueprint.github_plan.contains(line.as_str()));
    }
  }

  #[test]
  fn test_seeded_rng_is_reproducible() {
    let a = analyze("Pet adoption app", &mut StdRng::seed_from_u64(7)).unwrap();
    let b = analyze("Pet adoption app", &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn test_project_names_use_long_idea_words() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
      let name = project_name("an app for farmers", &mut rng);
      assert!(name.ends_with("Farmers"), "unexpected name {name}");
      assert!(PROJECT_PREFIXES.iter().any(|prefix| name.starts_with(prefix)));
    }
  }

  #[test]
  fn test_project_name_defaults_to_app() {
    let name = project_name("a b c", &mut StdRng::seed_from_u64(1));
    assert!(name.ends_with("App"));
  }

  #[test]
  fn test_value_proposition_mentions_key_processes() {
    let mut rng = StdRng::seed_from_u64(11);
    let pitches: Vec<String> = (0..200).map(|_| value_proposition(true, &mut rng)).collect();

    assert!(pitches.iter().any(|p| p.ends_with("automating key processes")));
    assert!(!pitches.iter().any(|p| p.ends_with("automating manual tasks")));
  }
}

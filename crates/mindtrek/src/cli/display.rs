//! Display formatting utilities for CLI output
//!
//! Every function here renders to a `String`; printing is left to the
//! commands so the layouts stay testable.

use bentley::daemon_logs::LogEntry;
use bentley::Level;
use colored::*;

use crate::analysis::AnalysisRecord;
use crate::session::{Notice, NoticeLevel, Section, SessionState};

const HEADER_IDEA_CHARS: usize = 100;
const LOADING_IDEA_CHARS: usize = 50;
const SCORE_BAR_WIDTH: usize = 20;

const LOADING_PHASES: [&str; 7] = [
  "Analyzing idea feasibility...",
  "Searching similar projects...",
  "Calculating uniqueness score...",
  "Generating development roadmap...",
  "Creating wireframe visualization...",
  "Drafting business model options...",
  "Preparing implementation guides...",
];

/// Cut `text` to `max_chars` characters, marking the cut with "..."
pub fn truncate_idea(text: &str, max_chars: usize) -> String {
  match text.char_indices().nth(max_chars) {
    Some((cut, _)) => format!("{}...", &text[..cut]),
    None => text.to_string(),
  }
}

/// Drop a leading "N. " from a numbered template line
pub fn strip_step_number(step: &str) -> &str {
  let digits = step.len() - step.trim_start_matches(|c: char| c.is_ascii_digit()).len();
  if digits == 0 {
    return step;
  }

  step[digits..].strip_prefix(". ").unwrap_or(step)
}

/// Fixed-width bar filled in proportion to a 0-100 score
pub fn score_bar(score: u8) -> String {
  let filled = usize::from(score.min(100)) * SCORE_BAR_WIDTH / 100;
  format!("{}{}", "█".repeat(filled), "░".repeat(SCORE_BAR_WIDTH - filled))
}

/// Wrap text to fit within a specified width
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.split('\n') {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let mut current_line = String::new();
    for word in paragraph.split_whitespace() {
      if current_line.is_empty() {
        current_line = word.to_string();
      } else if current_line.chars().count() + 1 + word.chars().count() <= width {
        current_line.push(' ');
        current_line.push_str(word);
      } else {
        lines.push(std::mem::take(&mut current_line));
        current_line = word.to_string();
      }
    }

    if !current_line.is_empty() {
      lines.push(current_line);
    }
  }

  lines
}

pub fn render_prompt() -> String {
  format!("{} ", "Describe your idea (or 'quit'):".cyan().bold())
}

pub fn render_loading(idea: &str) -> String {
  let mut out = format!(
    "{}\n{}\n",
    "Processing Your Idea".magenta().bold(),
    truncate_idea(idea, LOADING_IDEA_CHARS).dimmed()
  );
  for phase in LOADING_PHASES {
    out.push_str(&format!("  {} {}\n", "•".cyan(), phase.dimmed()));
  }
  out
}

pub fn render_notice(notice: &Notice) -> String {
  match notice.level {
    NoticeLevel::Success => format!("{} {}", "✓".green(), notice.message.green()),
    NoticeLevel::Error => format!("{} {}", "✗".red(), notice.message.red()),
  }
}

/// Whatever the session currently shows: the form, the loading line or the dashboard
pub fn render_state(state: &SessionState) -> String {
  if state.is_loading {
    return render_loading(&state.idea_text);
  }

  match (&state.result, state.is_submitted) {
    (Some(record), true) => render_dashboard(&state.idea_text, record, state.active_section),
    _ => render_prompt(),
  }
}

/// Header, scores, similar projects, twists and the active tab
pub fn render_dashboard(idea: &str, record: &AnalysisRecord, section: Section) -> String {
  let mut out = render_overview(idea, record);
  out.push('\n');
  out.push_str(&render_tabs(section));
  out.push('\n');
  out.push_str(&render_section(record, section));
  out
}

pub fn render_overview(idea: &str, record: &AnalysisRecord) -> String {
  let mut out = format!("{}\n", "=== Idea Analysis Results ===".blue().bold());
  out.push_str(&format!("\"{}\"\n", truncate_idea(idea, HEADER_IDEA_CHARS)));
  out.push_str(&format!("Summary: {}\n\n", record.idea_summary.bold()));

  out.push_str(&format!(
    "{:<18} {} {}\n",
    "Uniqueness Score",
    score_bar(record.uniqueness_score).cyan(),
    record.uniqueness_score.to_string().bold()
  ));
  out.push_str(&format!(
    "{:<18} {} {}\n",
    "Feasibility Score",
    score_bar(record.feasibility_score).magenta(),
    record.feasibility_score.to_string().bold()
  ));

  if !record.existing_projects.is_empty() {
    out.push_str(&format!("\n{}\n", "Similar Projects".yellow().bold()));
    for project in &record.existing_projects {
      out.push_str(&format!(
        "  {} ({}% similar)\n    {}\n    {}\n",
        project.name.bold(),
        project.similarity,
        project.description,
        project.url.underline()
      ));
    }
  }

  if !record.innovative_twists.is_empty() {
    out.push_str(&format!("\n{}\n", "Innovative Twists".yellow().bold()));
    for twist in &record.innovative_twists {
      out.push_str(&format!("  {} {}\n", "✦".cyan(), twist));
    }
  }

  out
}

/// Tab strip with the active tab highlighted
pub fn render_tabs(active: Section) -> String {
  let tabs: Vec<String> = Section::ALL
    .iter()
    .map(|section| {
      let label = format!("[{}]", section.tag());
      if *section == active {
        label.reverse().bold().to_string()
      } else {
        label.dimmed().to_string()
      }
    })
    .collect();

  tabs.join(" ")
}

pub fn render_section(record: &AnalysisRecord, section: Section) -> String {
  let mut out = format!("{}\n", section.title().green().bold());

  match section {
    Section::Roadmap => push_numbered(&mut out, &record.roadmap),
    Section::Wireframe => {
      out.push_str(&record.wireframe);
      out.push('\n');
    }
    Section::Business => {
      for line in &record.business_model {
        out.push_str(&format!("  {} {}\n", "•".cyan(), line));
      }
    }
    Section::Start => {
      push_numbered(&mut out, &record.how_to_start);
      out.push_str(&format!("\n{}\n", "Tech Stack".yellow().bold()));
      for line in &record.tech_stack {
        out.push_str(&format!("  {line}\n"));
      }
      out.push_str(&format!("\n{}\n{}\n", "GitHub Plan".yellow().bold(), record.github_plan));
    }
    Section::Launch => {
      for item in &record.launch_checklist {
        out.push_str(&format!("  {} {}\n", "☐".dimmed(), item));
      }
    }
  }

  out
}

fn push_numbered(out: &mut String, steps: &[String]) {
  for (index, step) in steps.iter().enumerate() {
    out.push_str(&format!("  {:>2}. {}\n", index + 1, strip_step_number(step)));
  }
}

/// One daemon log entry with its request context on a second line
pub fn render_log_entry(log: &LogEntry) -> String {
  let level = log.level.as_str();
  let level_colored = match log.level {
    Level::Error => level.red().bold(),
    Level::Warn => level.yellow().bold(),
    Level::Info => level.blue().bold(),
    Level::Debug | Level::Verbose => level.green(),
    Level::Success => level.bright_green().bold(),
  };

  let mut out = format!(
    "{} [{}] {}: {}",
    log.timestamp.to_rfc3339().cyan(),
    level_colored,
    log.component.dimmed(),
    log.message
  );

  if let Some(context) = &log.context {
    let mut parts = Vec::new();
    if let Some(request_id) = &context.request_id {
      parts.push(format!("request_id: {}", request_id.bright_blue()));
    }
    if let (Some(method), Some(path)) = (&context.method, &context.path) {
      parts.push(format!("{} {}", method.magenta().bold(), path.cyan()));
    }
    if let Some(status_code) = context.status_code {
      let status = status_code.to_string();
      let status = match status_code {
        200..=299 => status.green(),
        300..=399 => status.yellow(),
        _ => status.red(),
      };
      parts.push(format!("status: {status}"));
    }
    if let Some(duration_ms) = context.duration_ms {
      parts.push(format!("duration: {duration_ms:.2}ms"));
    }
    if let Some(user_agent) = &context.user_agent {
      parts.push(format!("user_agent: {}", user_agent.dimmed()));
    }

    if !parts.is_empty() {
      out.push_str(&format!("\n    {}", parts.join(", ")));
    }
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::analysis;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn record(idea: &str) -> AnalysisRecord {
    analysis::analyze(idea, &mut StdRng::seed_from_u64(7)).unwrap()
  }

  #[test]
  fn test_truncate_idea() {
    assert_eq!(truncate_idea("short", 100), "short");
    assert_eq!(truncate_idea("abcdef", 3), "abc...");
    assert_eq!(truncate_idea(&"x".repeat(100), 100), "x".repeat(100));
    assert_eq!(truncate_idea("héllo wörld", 4), "héll...");
  }

  #[test]
  fn test_strip_step_number() {
    assert_eq!(strip_step_number("1. Define core features"), "Define core features");
    assert_eq!(strip_step_number("12. Launch beta"), "Launch beta");
    assert_eq!(strip_step_number("No number here"), "No number here");
    assert_eq!(strip_step_number("2024 plans"), "2024 plans");
  }

  #[test]
  fn test_score_bar_scales_with_score() {
    colored::control::set_override(false);
    assert_eq!(score_bar(100), "█".repeat(20));
    assert_eq!(score_bar(0), "░".repeat(20));
    assert_eq!(score_bar(75).chars().filter(|c| *c == '█').count(), 15);
  }

  #[test]
  fn test_wrap_text() {
    let lines = wrap_text("one two three four", 9);
    assert_eq!(lines, vec!["one two", "three", "four"]);
  }

  #[test]
  fn test_render_state_picks_view() {
    colored::control::set_override(false);

    let idle = SessionState::default();
    assert!(render_state(&idle).contains("Describe your idea"));

    let loading = SessionState { idea_text: "A dog app".into(), is_loading: true, ..Default::default() };
    assert!(render_state(&loading).contains("Processing Your Idea"));

    let done = SessionState {
      idea_text: "A dog app".into(),
      is_submitted: true,
      result: Some(record("A dog app")),
      ..Default::default()
    };
    let rendered = render_state(&done);
    assert!(rendered.contains("Idea Analysis Results"));
    assert!(rendered.contains("Roadmap"));
  }

  #[test]
  fn test_render_section_contents() {
    colored::control::set_override(false);
    let record = record("A fitness tracking app with payments");

    let roadmap = render_section(&record, Section::Roadmap);
    assert_eq!(roadmap.lines().count(), 1 + record.roadmap.len());

    let wireframe = render_section(&record, Section::Wireframe);
    assert!(wireframe.contains(&record.wireframe));

    let start = render_section(&record, Section::Start);
    assert!(start.contains("GitHub Plan"));
    assert!(start.contains(&record.tech_stack[0]));

    let launch = render_section(&record, Section::Launch);
    assert_eq!(launch.lines().count(), 1 + record.launch_checklist.len());
  }

  #[test]
  fn test_render_tabs_lists_every_section() {
    colored::control::set_override(false);
    assert_eq!(
      render_tabs(Section::Business),
      "[roadmap] [wireframe] [business] [start] [launch]"
    );
  }
}

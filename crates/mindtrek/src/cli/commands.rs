use anyhow::Result;
use colored::*;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::client::get_client;
use crate::cli::display::{
  render_dashboard, render_loading, render_log_entry, render_notice, render_overview,
  render_prompt, render_section, render_state,
};
use crate::session::{IdeaSession, Notice, NoticeLevel, Section, SubmitOutcome};
use crate::service::{AnalysisService, LocalAnalysis};

/// Which tabs `analyze` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionView {
  One(Section),
  All,
}

/// In-process analysis for `--local`, otherwise the configured server
pub fn build_service(local: bool) -> Result<Arc<dyn AnalysisService>> {
  if local {
    return Ok(Arc::new(LocalAnalysis));
  }

  Ok(Arc::new(get_client()?))
}

fn print_notices(notices: &[Notice]) {
  for notice in notices {
    match notice.level {
      NoticeLevel::Success => println!("{}", render_notice(notice)),
      NoticeLevel::Error => eprintln!("{}", render_notice(notice)),
    }
  }
}

/// Run one idea through a session and print the dashboard
pub async fn analyze(idea: &str, view: SectionView, local: bool) -> Result<()> {
  let session = IdeaSession::new(build_service(local)?);
  session.set_idea_text(idea).await;

  if !idea.trim().is_empty() {
    eprint!("{}", render_loading(idea.trim()));
  }

  let outcome = session.submit().await;
  print_notices(&session.drain_notices().await);

  if outcome != SubmitOutcome::Completed {
    std::process::exit(1);
  }

  let state = session.snapshot().await;
  let Some(record) = state.result.as_ref() else {
    return Ok(());
  };

  match view {
    SectionView::One(section) => println!("{}", render_dashboard(&state.idea_text, record, section)),
    SectionView::All => {
      println!("{}", render_overview(&state.idea_text, record));
      for section in Section::ALL {
        println!("{}", render_section(record, section));
      }
    }
  }

  Ok(())
}

const INTERACTIVE_HELP: &str =
  "Tabs: roadmap, wireframe, business, start, launch | 'reset' for a new idea | 'quit' to exit";

/// Prompt loop over one session: idea entry, then tab switching until reset
pub async fn interactive(local: bool) -> Result<()> {
  let session = IdeaSession::new(build_service(local)?);
  let mut lines = BufReader::new(tokio::io::stdin()).lines();

  println!("{}", "MindTrek - turn an idea into a plan".blue().bold());

  loop {
    let state = session.snapshot().await;
    if state.is_submitted {
      print!("{} ", "tab>".cyan().bold());
    } else {
      print!("{}", render_prompt());
    }
    std::io::stdout().flush()?;

    let Some(line) = lines.next_line().await? else {
      break;
    };
    let input = line.trim();

    if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
      break;
    }

    if state.is_submitted {
      if input.eq_ignore_ascii_case("reset") {
        session.reset().await;
        continue;
      }

      match input.parse::<Section>() {
        Ok(section) => {
          session.set_active_section(section).await;
          println!("{}", render_state(&session.snapshot().await));
        }
        Err(_) => println!("{}", INTERACTIVE_HELP.dimmed()),
      }
      continue;
    }

    session.set_idea_text(input).await;
    if !input.is_empty() {
      eprint!("{}", render_loading(input));
    }

    let outcome = session.submit().await;
    print_notices(&session.drain_notices().await);

    if outcome == SubmitOutcome::Completed {
      println!("{}", render_state(&session.snapshot().await));
      println!("{}", INTERACTIVE_HELP.dimmed());
    }
  }

  Ok(())
}

/// Check that the analysis server is up
pub async fn status() -> Result<()> {
  let client = get_client()?;

  match client.health_check().await {
    Ok(response) => {
      println!("{} Server at {} is {}", "✓".green(), client.base_url().cyan(), response.data.status.green());
      println!("  version:  {}", response.version);
      println!("  data dir: {}", response.data.data_dir);
      println!("  log file: {}", response.data.log_file);
      Ok(())
    }
    Err(e) => {
      bentley::error!("Server at {} is not reachable: {}", client.base_url(), e);
      std::process::exit(1);
    }
  }
}

/// Query daemon logs for debugging and monitoring
pub async fn logs(limit: usize, level: Option<&str>) -> Result<()> {
  let client = get_client()?;
  let logs_response = client.get_logs(limit, level).await?;

  if logs_response.data.logs.is_empty() {
    println!("No logs found.");
    return Ok(());
  }

  for log in &logs_response.data.logs {
    println!("{}", render_log_entry(log));
  }

  Ok(())
}

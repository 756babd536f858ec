use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mindtrek::cli::commands::{self, SectionView};
use mindtrek::session::Section;

#[derive(Parser)]
#[command(name = "mindtrek")]
#[command(about = "MindTrek - Idea Analysis\nTurn a product idea into scores, a roadmap and a launch plan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

/// Where the analysis runs
#[derive(Args)]
struct Backend {
  /// Analyze in-process instead of calling the server (nothing is stored)
  #[arg(long)]
  local: bool,
}

#[derive(Subcommand)]
enum Command {
  /// Analyze one idea and print the dashboard
  Analyze {
    /// The idea, as free text
    #[arg(required = true)]
    idea: Vec<String>,
    /// Result tab to show
    #[arg(short, long, value_enum, default_value_t = Section::Roadmap, conflicts_with = "all")]
    section: Section,
    /// Show every result tab
    #[arg(short, long)]
    all: bool,
    #[command(flatten)]
    backend: Backend,
  },
  /// Enter ideas and browse result tabs from a prompt
  Interactive {
    #[command(flatten)]
    backend: Backend,
  },
  /// Check that the analysis server is reachable
  Status,
  /// Query daemon logs for debugging and monitoring
  Logs {
    /// Maximum number of log entries to return
    #[arg(short, long, default_value = "50")]
    limit: usize,
    /// Filter by log level (verbose, debug, info, success, warn, error, all)
    #[arg(long, default_value = "all")]
    level: String,
  },
}

async fn handle(command: Command) -> Result<()> {
  match command {
    Command::Analyze { idea, section, all, backend } => {
      let view = if all { SectionView::All } else { SectionView::One(section) };
      commands::analyze(&idea.join(" "), view, backend.local).await
    }
    Command::Interactive { backend } => commands::interactive(backend.local).await,
    Command::Status => commands::status().await,
    Command::Logs { limit, level } => commands::logs(limit, Some(&level)).await,
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  handle(cli.command).await?;
  Ok(())
}

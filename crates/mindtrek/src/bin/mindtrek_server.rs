//! MindTrek REST Server
//!
//! Serves idea analysis over HTTP and persists each analyzed idea.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use mindtrek::config::{ServerConfig, DEFAULT_BIND};
use mindtrek::server::startup::start_server;

#[derive(Parser)]
#[command(name = "mindtrek_server")]
#[command(about = "MindTrek REST API Server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
  /// Server bind address
  #[arg(long, default_value = DEFAULT_BIND)]
  bind: SocketAddr,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let filter = if args.verbose {
    EnvFilter::new("debug,hyper=info")
  } else {
    EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("mindtrek=info,tower_http=info,warn"))
  };

  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  bentley::info!("Starting MindTrek REST Server v{}", env!("CARGO_PKG_VERSION"));
  bentley::info!("Binding to address: {}", args.bind);

  start_server(ServerConfig::new(args.bind)?).await?;

  Ok(())
}

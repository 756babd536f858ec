//! REST server startup and configuration

use anyhow::{Context, Result};
use axum::serve;
use bentley::daemon_logs::DaemonLogs;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::{routing::create_router, state::AppState, store::JsonlIdeaStore};

const COMPONENT: &str = "mindtrek-server";

/// Start the REST server and run until Ctrl-C
pub async fn start_server(config: ServerConfig) -> Result<()> {
  let daemon_logs = DaemonLogs::new(config.logs_path())
    .with_context(|| format!("Failed to open server logs at {}", config.logs_path().display()))?;
  let store = JsonlIdeaStore::open(config.ideas_path())
    .with_context(|| format!("Failed to open idea store at {}", config.ideas_path().display()))?;

  daemon_logs.info(&format!("Starting mindtrek REST server on {}", config.bind), COMPONENT).await;
  daemon_logs
    .info(&format!("Storing analyzed ideas in {}", config.ideas_path().display()), COMPONENT)
    .await;

  let state = AppState::new(Arc::new(store), daemon_logs.clone(), config.data_dir.clone());
  let app = create_router(state);

  let listener = TcpListener::bind(config.bind).await?;
  daemon_logs.info(&format!("Server listening on {}", config.bind), COMPONENT).await;

  match serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
    Ok(()) => {
      daemon_logs.info("Server shutdown gracefully", COMPONENT).await;
      Ok(())
    }
    Err(e) => {
      daemon_logs.error(&format!("Server error: {e}"), COMPONENT).await;
      Err(anyhow::anyhow!("Server error: {}", e))
    }
  }
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::error!(error = %e, "Failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
}

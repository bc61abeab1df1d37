//! Logging setup
//!
//! Installs a global `tracing` fmt subscriber on stderr. The filter comes
//! from `SWIMLOGS_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_FILTER_VAR;

static INIT: OnceLock<()> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
  #[error("Failed to install global tracing subscriber: {0}")]
  SetGlobal(String),
}

/// Initialize tracing. Subsequent calls are no-ops.
pub fn init() -> Result<(), LoggingError> {
  if INIT.get().is_some() {
    return Ok(());
  }

  tracing_subscriber::fmt()
    .with_env_filter(build_env_filter())
    .with_writer(std::io::stderr)
    .try_init()
    .map_err(|e| LoggingError::SetGlobal(e.to_string()))?;
  let _ = INIT.set(());

  tracing::debug!("Logging initialized");
  Ok(())
}

fn build_env_filter() -> EnvFilter {
  EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
}

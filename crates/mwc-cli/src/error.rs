//! CLI error types.

use mwc::MwcError;
use mwc_ws::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
  #[error(transparent)]
  Mwc(#[from] MwcError),

  #[error(transparent)]
  Server(#[from] ServerError),

  /// `call` returned an error envelope; the envelope was already printed.
  #[error("{method} failed")]
  CallFailed { method: String },

  #[error("Invalid app: {0}")]
  InvalidApp(String),

  #[error("Failed to encode output: {0}")]
  Output(#[from] serde_json::Error),

  #[error("Failed to start runtime: {0}")]
  Runtime(#[from] std::io::Error),

  #[error("WebSocket server thread panicked")]
  ServerPanicked,
}

//! Error types for xterm-config

use thiserror::Error;

/// Errors that can occur while preparing or exporting defaults
///
/// Resolving a default never fails; these cover the inputs and outputs around it.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Platform error: {0}")]
  Platform(#[from] xterm_platform::PlatformError),

  #[error("invalid environment assignment '{0}', expected KEY=VALUE")]
  InvalidAssignment(String),

  #[error("unknown setting '{0}'")]
  UnknownSetting(String),

  #[error("failed to serialize default: {0}")]
  Serialize(#[from] serde_json::Error),
}

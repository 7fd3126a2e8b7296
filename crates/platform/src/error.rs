//! Error types for xterm-platform

use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("unknown platform '{0}' (expected one of: win32, darwin, linux, unix)")]
  UnknownPlatform(String),
}

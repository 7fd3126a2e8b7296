use std::path::PathBuf;

use tracing::warn;

use crate::env::{EnvSource, ProcessEnv};
use crate::os::Os;

/// Everything a default resolver is allowed to look at
///
/// Bundles the platform identifier with an environment source so callers can
/// substitute either one without touching process globals.
#[derive(Debug, Clone)]
pub struct EnvironmentContext<E = ProcessEnv> {
  os: Os,
  env: E,
}

impl EnvironmentContext<ProcessEnv> {
  /// Context for the running host, backed by the live process environment
  pub fn current() -> Self {
    Self::new(Os::current(), ProcessEnv)
  }
}

impl<E: EnvSource> EnvironmentContext<E> {
  pub fn new(os: Os, env: E) -> Self {
    Self { os, env }
  }

  pub fn os(&self) -> Os {
    self.os
  }

  /// Returns a copy of this context that reports a different platform
  pub fn with_os(self, os: Os) -> Self {
    Self { os, ..self }
  }

  /// Returns the value of `name`, treating an empty value as unset
  pub fn var_non_empty(&self, name: &str) -> Option<String> {
    self.env.var(name).filter(|value| !value.is_empty())
  }

  /// Returns the user's home directory
  ///
  /// Falls back to the current directory when the source cannot determine
  /// one, and to `.` if even that is unavailable, so path composition stays total.
  pub fn home_dir(&self) -> PathBuf {
    match self.env.home_dir() {
      Some(home) => home,
      None => {
        warn!(os = %self.os, "could not determine home directory, using current directory");
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
      }
    }
  }
}

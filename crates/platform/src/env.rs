//! Environment sources
//!
//! Resolvers never touch `std::env` directly. They ask an [`EnvSource`], which
//! is either the live process environment or an owned snapshot.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Read-only view of environment variables and the user's home directory
pub trait EnvSource {
  /// Returns the value of `name`, or `None` when unset or not valid UTF-8
  fn var(&self, name: &str) -> Option<String>;

  /// Returns the user's home directory if one can be determined
  fn home_dir(&self) -> Option<PathBuf>;
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
  fn var(&self, name: &str) -> Option<String> {
    (**self).var(name)
  }

  fn home_dir(&self) -> Option<PathBuf> {
    (**self).home_dir()
  }
}

/// The live process environment, re-read on every query
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
  fn var(&self, name: &str) -> Option<String> {
    std::env::var_os(name).and_then(|value| value.into_string().ok())
  }

  fn home_dir(&self) -> Option<PathBuf> {
    dirs::home_dir()
  }
}

/// An owned environment snapshot
///
/// Useful for tests and for callers that want to resolve defaults for an
/// environment other than their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
  vars: BTreeMap<String, String>,
  home: Option<PathBuf>,
}

impl MapEnv {
  /// Create an empty snapshot with no variables and no home directory
  pub fn new() -> Self {
    Self::default()
  }

  /// Copy the current process environment and home directory
  ///
  /// Variables whose name or value is not valid UTF-8 are skipped.
  pub fn capture() -> Self {
    let vars = std::env::vars_os()
      .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
      .collect();
    Self {
      vars,
      home: dirs::home_dir(),
    }
  }

  pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.set_var(name, value);
    self
  }

  pub fn without_var(mut self, name: &str) -> Self {
    self.remove_var(name);
    self
  }

  pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
    self.home = Some(home.into());
    self
  }

  pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
    self.vars.insert(name.into(), value.into());
  }

  pub fn remove_var(&mut self, name: &str) {
    self.vars.remove(name);
  }

  pub fn set_home(&mut self, home: impl Into<PathBuf>) {
    self.home = Some(home.into());
  }
}

impl EnvSource for MapEnv {
  fn var(&self, name: &str) -> Option<String> {
    self.vars.get(name).cloned()
  }

  fn home_dir(&self) -> Option<PathBuf> {
    self.home.clone()
  }
}

//! Environment overrides given as `KEY=VALUE` assignments

use tracing::debug;
use xterm_platform::{EnvSource, MapEnv, Os};

use crate::error::ConfigError;

/// Split `KEY=VALUE` into its parts
///
/// The value may be empty or contain further `=` characters; the key may not be empty.
pub fn parse_assignment(assignment: &str) -> Result<(String, String), ConfigError> {
  match assignment.split_once('=') {
    Some((key, value)) if !key.trim().is_empty() => Ok((key.trim().to_string(), value.to_string())),
    _ => Err(ConfigError::InvalidAssignment(assignment.to_string())),
  }
}

/// Apply assignments and removals to a snapshot
///
/// Removals run after assignments, so a variable both set and unset ends up unset.
pub fn apply_overrides<S, U>(mut env: MapEnv, assignments: S, unset: U) -> Result<MapEnv, ConfigError>
where
  S: IntoIterator,
  S::Item: AsRef<str>,
  U: IntoIterator,
  U::Item: AsRef<str>,
{
  for assignment in assignments {
    let (key, value) = parse_assignment(assignment.as_ref())?;
    debug!(%key, %value, "overriding environment variable");
    env.set_var(key, value);
  }
  for name in unset {
    debug!(name = name.as_ref(), "removing environment variable");
    env.remove_var(name.as_ref());
  }
  Ok(env)
}

/// Point the snapshot's home directory at its own `HOME` (`USERPROFILE` on Windows)
///
/// Keeps an overlaid snapshot consistent with the live environment, where the
/// detected home follows that variable. When the variable is unset or empty the
/// captured home is kept.
pub fn sync_home(env: &mut MapEnv, os: Os) {
  let var = if os.is_windows() { "USERPROFILE" } else { "HOME" };
  if let Some(home) = env.var(var).filter(|value| !value.is_empty()) {
    debug!(var, %home, "using overridden home directory");
    env.set_home(home);
  }
}

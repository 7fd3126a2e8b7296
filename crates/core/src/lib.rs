//! xterm-config: default settings for the atom-xterm terminal plugin
//!
//! This crate computes the values the editor's settings layer shows before the
//! user overrides anything:
//! - `Resolver`: one pure lookup per setting, driven by an `EnvironmentContext`
//! - `settings`: conversion of native defaults into the textual form the settings layer expects
//! - `overrides`: building environment snapshots from `KEY=VALUE` assignments

pub mod consts;
mod error;
pub mod overrides;
pub mod resolver;
pub mod settings;

pub use error::ConfigError;
pub use resolver::Resolver;
pub use settings::{Defaults, SettingDefault, SettingValue};

// Re-export platform types so callers need a single dependency
pub use xterm_platform::{EnvSource, EnvironmentContext, MapEnv, Os, PLUGIN_NAME, ProcessEnv};

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

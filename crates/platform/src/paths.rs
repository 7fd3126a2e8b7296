//! User data path resolution

use std::path::PathBuf;

use tracing::debug;

use crate::context::EnvironmentContext;
use crate::env::EnvSource;
use crate::os::Os;

/// Directory name that namespaces the plugin's user data
pub const PLUGIN_NAME: &str = "atom-xterm";

/// Returns the directory the plugin stores user data in
///
/// - Windows: `%APPDATA%\atom-xterm`, or `~\AppData\Roaming\atom-xterm`
/// - macOS: `~/Library/Application Support/atom-xterm`
/// - Linux and other Unix: `$XDG_CONFIG_HOME/atom-xterm`, or `~/.config/atom-xterm`
pub fn user_data_path<E: EnvSource>(ctx: &EnvironmentContext<E>) -> PathBuf {
  let base = match ctx.os() {
    Os::Windows => match ctx.var_non_empty("APPDATA") {
      Some(appdata) => PathBuf::from(appdata),
      None => {
        debug!("APPDATA not set, using roaming profile under home");
        ctx.home_dir().join("AppData").join("Roaming")
      }
    },
    Os::MacOs => ctx.home_dir().join("Library").join("Application Support"),
    Os::Linux | Os::OtherUnix => match ctx.var_non_empty("XDG_CONFIG_HOME") {
      Some(config_home) => PathBuf::from(config_home),
      None => {
        debug!("XDG_CONFIG_HOME not set, using ~/.config");
        ctx.home_dir().join(".config")
      }
    },
  };
  base.join(PLUGIN_NAME)
}

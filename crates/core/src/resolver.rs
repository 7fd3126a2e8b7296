//! Platform default resolver
//!
//! Every method is an independent lookup against the resolver's
//! [`EnvironmentContext`]. Nothing is cached, so a resolver backed by
//! [`ProcessEnv`] always reflects the environment at call time.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::debug;
use xterm_platform::{EnvSource, EnvironmentContext, Os, ProcessEnv, user_data_path};

use crate::consts::{
  DEFAULT_FONT_SIZE, DEFAULT_TERM_TYPE, MAXIMUM_FONT_SIZE, MINIMUM_FONT_SIZE, POSIX_SHELL, WINDOWS_SHELL,
};

#[derive(Debug, Clone)]
pub struct Resolver<E = ProcessEnv> {
  ctx: EnvironmentContext<E>,
}

impl Resolver<ProcessEnv> {
  /// Resolver for the running host and its live environment
  pub fn current() -> Self {
    Self::new(EnvironmentContext::current())
  }
}

impl<E: EnvSource> Resolver<E> {
  pub fn new(ctx: EnvironmentContext<E>) -> Self {
    Self { ctx }
  }

  pub fn context(&self) -> &EnvironmentContext<E> {
    &self.ctx
  }

  pub fn os(&self) -> Os {
    self.ctx.os()
  }

  /// `COMSPEC` on Windows, `SHELL` elsewhere
  pub fn default_shell_command(&self) -> String {
    let (var, fallback) = match self.ctx.os() {
      Os::Windows => ("COMSPEC", WINDOWS_SHELL),
      Os::MacOs | Os::Linux | Os::OtherUnix => ("SHELL", POSIX_SHELL),
    };
    self.ctx.var_non_empty(var).unwrap_or_else(|| {
      debug!(var, fallback, "shell variable not set");
      fallback.to_string()
    })
  }

  pub fn default_args(&self) -> Vec<String> {
    Vec::new()
  }

  pub fn default_term_type(&self) -> String {
    self
      .ctx
      .var_non_empty("TERM")
      .unwrap_or_else(|| DEFAULT_TERM_TYPE.to_string())
  }

  /// `USERPROFILE` on Windows, `HOME` elsewhere
  ///
  /// When the variable is missing this falls back to the home directory the
  /// environment source detects, and then to the current directory.
  pub fn default_cwd(&self) -> String {
    let var = match self.ctx.os() {
      Os::Windows => "USERPROFILE",
      Os::MacOs | Os::Linux | Os::OtherUnix => "HOME",
    };
    match self.ctx.var_non_empty(var) {
      Some(dir) => dir,
      None => {
        debug!(var, "working directory variable not set, using detected home");
        self.ctx.home_dir().to_string_lossy().into_owned()
      }
    }
  }

  /// Environment override string; empty means the spawned shell inherits unchanged
  pub fn default_env(&self) -> String {
    String::new()
  }

  pub fn default_set_env(&self) -> BTreeMap<String, String> {
    BTreeMap::new()
  }

  pub fn default_delete_env(&self) -> Vec<String> {
    Vec::new()
  }

  /// Empty means the runtime's default encoding
  pub fn default_encoding(&self) -> String {
    String::new()
  }

  pub fn default_font_size(&self) -> u32 {
    DEFAULT_FONT_SIZE
  }

  pub fn minimum_font_size(&self) -> u32 {
    MINIMUM_FONT_SIZE
  }

  pub fn maximum_font_size(&self) -> u32 {
    MAXIMUM_FONT_SIZE
  }

  pub fn default_leave_open_after_exit(&self) -> bool {
    true
  }

  pub fn default_allow_relaunching_terminals_on_startup(&self) -> bool {
    true
  }

  pub fn default_relaunch_terminal_on_startup(&self) -> bool {
    true
  }

  pub fn default_xterm_options(&self) -> Map<String, Value> {
    Map::new()
  }

  /// Empty means the title is derived from the running process
  pub fn default_title(&self) -> String {
    String::new()
  }

  pub fn default_prompt_to_startup(&self) -> bool {
    false
  }

  pub fn user_data_path(&self) -> PathBuf {
    user_data_path(&self.ctx)
  }
}

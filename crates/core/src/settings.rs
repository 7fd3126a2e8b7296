//! Settings boundary
//!
//! The editor's settings layer stores collection defaults as JSON text
//! (`"[]"`, `"{}"`). Resolvers return native collections; this module is the
//! one place they are turned into text.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};
use xterm_platform::{EnvSource, Os};

use crate::consts::SETTINGS_NAMESPACE;
use crate::error::ConfigError;
use crate::resolver::Resolver;

/// Short name of the one default that is not a registered setting
pub const USER_DATA_PATH: &str = "userDataPath";

/// A default as the settings layer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
  Text(String),
  Integer(u32),
  Boolean(bool),
}

impl fmt::Display for SettingValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SettingValue::Text(text) => write!(f, "{}", text),
      SettingValue::Integer(n) => write!(f, "{}", n),
      SettingValue::Boolean(b) => write!(f, "{}", b),
    }
  }
}

impl From<String> for SettingValue {
  fn from(value: String) -> Self {
    SettingValue::Text(value)
  }
}

impl From<u32> for SettingValue {
  fn from(value: u32) -> Self {
    SettingValue::Integer(value)
  }
}

impl From<bool> for SettingValue {
  fn from(value: bool) -> Self {
    SettingValue::Boolean(value)
  }
}

/// One registered setting and its default
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingDefault {
  pub key: String,
  pub value: SettingValue,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub minimum: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub maximum: Option<u32>,
}

impl SettingDefault {
  fn new(group: &str, name: &str, value: impl Into<SettingValue>) -> Self {
    Self {
      key: format!("{}.{}.{}", SETTINGS_NAMESPACE, group, name),
      value: value.into(),
      minimum: None,
      maximum: None,
    }
  }

  fn bounded(mut self, minimum: u32, maximum: u32) -> Self {
    self.minimum = Some(minimum);
    self.maximum = Some(maximum);
    self
  }

  /// The last segment of the key, e.g. `fontSize`
  pub fn name(&self) -> &str {
    self.key.rsplit('.').next().unwrap_or(&self.key)
  }
}

/// Every default in native form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Defaults {
  pub platform: Os,
  pub command: String,
  pub args: Vec<String>,
  pub name: String,
  pub cwd: String,
  pub env: String,
  pub set_env: BTreeMap<String, String>,
  pub delete_env: Vec<String>,
  pub encoding: String,
  pub font_size: u32,
  pub minimum_font_size: u32,
  pub maximum_font_size: u32,
  pub leave_open_after_exit: bool,
  pub allow_relaunching_terminals_on_startup: bool,
  pub relaunch_terminal_on_startup: bool,
  pub xterm_options: Map<String, Value>,
  pub title: String,
  pub prompt_to_startup: bool,
  pub user_data_path: PathBuf,
}

impl<E: EnvSource> Resolver<E> {
  /// Resolve every default once
  pub fn snapshot(&self) -> Defaults {
    Defaults {
      platform: self.os(),
      command: self.default_shell_command(),
      args: self.default_args(),
      name: self.default_term_type(),
      cwd: self.default_cwd(),
      env: self.default_env(),
      set_env: self.default_set_env(),
      delete_env: self.default_delete_env(),
      encoding: self.default_encoding(),
      font_size: self.default_font_size(),
      minimum_font_size: self.minimum_font_size(),
      maximum_font_size: self.maximum_font_size(),
      leave_open_after_exit: self.default_leave_open_after_exit(),
      allow_relaunching_terminals_on_startup: self.default_allow_relaunching_terminals_on_startup(),
      relaunch_terminal_on_startup: self.default_relaunch_terminal_on_startup(),
      xterm_options: self.default_xterm_options(),
      title: self.default_title(),
      prompt_to_startup: self.default_prompt_to_startup(),
      user_data_path: self.user_data_path(),
    }
  }

  /// Defaults for every registered setting, in registration order
  pub fn setting_defaults(&self) -> Result<Vec<SettingDefault>, ConfigError> {
    const PTY: &str = "spawnPtySettings";
    const TERMINAL: &str = "terminalSettings";

    Ok(vec![
      SettingDefault::new(PTY, "command", self.default_shell_command()),
      SettingDefault::new(PTY, "args", to_text(&self.default_args())?),
      SettingDefault::new(PTY, "name", self.default_term_type()),
      SettingDefault::new(PTY, "cwd", self.default_cwd()),
      SettingDefault::new(PTY, "env", self.default_env()),
      SettingDefault::new(PTY, "setEnv", to_text(&self.default_set_env())?),
      SettingDefault::new(PTY, "deleteEnv", to_text(&self.default_delete_env())?),
      SettingDefault::new(PTY, "encoding", self.default_encoding()),
      SettingDefault::new(TERMINAL, "fontSize", self.default_font_size())
        .bounded(self.minimum_font_size(), self.maximum_font_size()),
      SettingDefault::new(TERMINAL, "leaveOpenAfterExit", self.default_leave_open_after_exit()),
      SettingDefault::new(
        TERMINAL,
        "allowRelaunchingTerminalsOnStartup",
        self.default_allow_relaunching_terminals_on_startup(),
      ),
      SettingDefault::new(
        TERMINAL,
        "relaunchTerminalOnStartup",
        self.default_relaunch_terminal_on_startup(),
      ),
      SettingDefault::new(TERMINAL, "xtermOptions", to_text(&self.default_xterm_options())?),
      SettingDefault::new(TERMINAL, "title", self.default_title()),
      SettingDefault::new(TERMINAL, "promptToStartup", self.default_prompt_to_startup()),
    ])
  }

  /// Look up one default by short name (`fontSize`) or full key
  /// (`atom-xterm.terminalSettings.fontSize`)
  ///
  /// `userDataPath` is accepted too even though it is not a registered setting.
  pub fn get(&self, name: &str) -> Result<SettingValue, ConfigError> {
    if name == USER_DATA_PATH {
      return Ok(SettingValue::Text(self.user_data_path().to_string_lossy().into_owned()));
    }
    self
      .setting_defaults()?
      .into_iter()
      .find(|setting| setting.key == name || setting.name() == name)
      .map(|setting| setting.value)
      .ok_or_else(|| ConfigError::UnknownSetting(name.to_string()))
  }
}

fn to_text<T: Serialize + ?Sized>(value: &T) -> Result<String, ConfigError> {
  Ok(serde_json::to_string(value)?)
}

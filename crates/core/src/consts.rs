//! Literal defaults used when the environment has nothing better to offer

pub use xterm_platform::PLUGIN_NAME;

/// Shell used on Windows when `COMSPEC` is unset
pub const WINDOWS_SHELL: &str = "cmd.exe";

/// Shell used on Unix-like systems when `SHELL` is unset
pub const POSIX_SHELL: &str = "/bin/sh";

pub const DEFAULT_TERM_TYPE: &str = "xterm-256color";

pub const DEFAULT_FONT_SIZE: u32 = 14;
pub const MINIMUM_FONT_SIZE: u32 = 8;
pub const MAXIMUM_FONT_SIZE: u32 = 100;

/// Prefix shared by every settings key the plugin registers
pub const SETTINGS_NAMESPACE: &str = PLUGIN_NAME;

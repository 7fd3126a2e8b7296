use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlatformError;

/// Operating system families the resolvers distinguish between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Os {
  #[serde(rename = "win32")]
  Windows,
  #[serde(rename = "darwin")]
  MacOs,
  #[serde(rename = "linux")]
  Linux,
  #[serde(rename = "unix")]
  OtherUnix,
}

impl Os {
  /// Detect the operating system this binary was built for
  ///
  /// Anything that is not Windows, macOS or Linux is treated as a generic Unix.
  pub fn current() -> Self {
    match std::env::consts::OS {
      "windows" => Self::Windows,
      "macos" => Self::MacOs,
      "linux" => Self::Linux,
      _ => Self::OtherUnix,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Windows => "win32",
      Self::MacOs => "darwin",
      Self::Linux => "linux",
      Self::OtherUnix => "unix",
    }
  }

  pub fn is_windows(&self) -> bool {
    *self == Self::Windows
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Os {
  type Err = PlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "win32" | "windows" => Ok(Self::Windows),
      "darwin" | "macos" => Ok(Self::MacOs),
      "linux" => Ok(Self::Linux),
      "unix" | "other-unix" => Ok(Self::OtherUnix),
      _ => Err(PlatformError::UnknownPlatform(s.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn current_matches_build_target() {
    let os = Os::current();
    assert_eq!(os.is_windows(), cfg!(windows));
    if cfg!(target_os = "macos") {
      assert_eq!(os, Os::MacOs);
    }
  }

  #[test]
  fn macos_uses_darwin_identifier() {
    assert_eq!(Os::MacOs.as_str(), "darwin");
    assert_eq!(Os::Windows.to_string(), "win32");
  }

  #[test]
  fn display_and_parse_agree() {
    for os in [Os::Windows, Os::MacOs, Os::Linux, Os::OtherUnix] {
      assert_eq!(os.to_string().parse::<Os>().unwrap(), os);
    }
  }

  #[test]
  fn parse_accepts_aliases() {
    assert_eq!("Windows".parse::<Os>().unwrap(), Os::Windows);
    assert_eq!("macos".parse::<Os>().unwrap(), Os::MacOs);
    assert_eq!("other-unix".parse::<Os>().unwrap(), Os::OtherUnix);
  }

  #[test]
  fn parse_rejects_unknown_names() {
    let err = "beos".parse::<Os>().unwrap_err();
    assert!(matches!(err, PlatformError::UnknownPlatform(ref name) if name == "beos"));
    assert!(err.to_string().contains("beos"));
  }
}

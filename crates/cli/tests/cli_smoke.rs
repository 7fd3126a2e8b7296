//! CLI smoke tests for xterm-defaults.
//!
//! These tests run the binary with explicit platform and environment
//! overrides so results do not depend on the machine running them.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Get a Command for the xterm-defaults binary.
fn xterm_cmd() -> Command {
  cargo_bin_cmd!("xterm-defaults")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  xterm_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  xterm_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("xterm-defaults"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["show", "get", "data-dir", "info"] {
    xterm_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// get
// =============================================================================

#[test]
fn get_windows_shell_without_comspec() {
  xterm_cmd()
    .args(["--platform", "win32", "--unset", "COMSPEC", "get", "command"])
    .assert()
    .success()
    .stdout("cmd.exe\n");
}

#[test]
fn get_windows_shell_with_comspec() {
  xterm_cmd()
    .args(["--platform", "win32", "--env", "COMSPEC=somecommand.exe", "get", "command"])
    .assert()
    .success()
    .stdout("somecommand.exe\n");
}

#[test]
fn get_posix_shell_without_shell() {
  xterm_cmd()
    .args(["--platform", "linux", "--unset", "SHELL", "get", "command"])
    .assert()
    .success()
    .stdout("/bin/sh\n");
}

#[test]
fn get_reads_live_environment() {
  xterm_cmd()
    .args(["--platform", "linux", "get", "name"])
    .env("TERM", "sometermtype")
    .assert()
    .success()
    .stdout("sometermtype\n");

  xterm_cmd()
    .args(["get", "name"])
    .env_remove("TERM")
    .assert()
    .success()
    .stdout("xterm-256color\n");
}

#[test]
fn get_collection_defaults_as_text() {
  for (name, expected) in [("args", "[]\n"), ("setEnv", "{}\n"), ("deleteEnv", "[]\n"), ("xtermOptions", "{}\n")] {
    xterm_cmd().args(["get", name]).assert().success().stdout(expected);
  }
}

#[test]
fn get_fixed_defaults() {
  xterm_cmd().args(["get", "fontSize"]).assert().success().stdout("14\n");
  xterm_cmd()
    .args(["get", "atom-xterm.terminalSettings.promptToStartup"])
    .assert()
    .success()
    .stdout("false\n");
}

#[test]
fn get_unknown_setting_fails() {
  xterm_cmd()
    .args(["get", "colorScheme"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown setting 'colorScheme'"));
}

// =============================================================================
// data-dir
// =============================================================================

#[test]
fn data_dir_honours_xdg_config_home() {
  xterm_cmd()
    .args(["--platform", "linux", "--env", "XDG_CONFIG_HOME=/some/dir", "data-dir"])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("/some/dir").and(predicate::str::contains("atom-xterm")));
}

#[test]
fn data_dir_on_darwin_uses_application_support() {
  xterm_cmd()
    .args(["--platform", "darwin", "--home", "/Users/someone", "data-dir"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Application Support").and(predicate::str::contains("atom-xterm")));
}

#[cfg(unix)]
#[test]
fn data_dir_overlay_matches_live_home() {
  let overlay = xterm_cmd()
    .args(["--platform", "linux", "--unset", "XDG_CONFIG_HOME", "--env", "HOME=/tmp/overlay-home", "data-dir"])
    .output()
    .unwrap();
  let live = xterm_cmd()
    .args(["--platform", "linux", "data-dir"])
    .env_remove("XDG_CONFIG_HOME")
    .env("HOME", "/tmp/overlay-home")
    .output()
    .unwrap();

  assert!(overlay.status.success() && live.status.success());
  assert_eq!(String::from_utf8_lossy(&overlay.stdout), String::from_utf8_lossy(&live.stdout));
  assert!(String::from_utf8_lossy(&overlay.stdout).starts_with("/tmp/overlay-home/.config"));
}

#[test]
fn home_flag_wins_over_overridden_home_variable() {
  xterm_cmd()
    .args(["--platform", "darwin", "--env", "HOME=/ignored", "--home", "/Users/someone", "data-dir"])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("/Users/someone"));
}

// =============================================================================
// show
// =============================================================================

#[test]
fn show_lists_every_setting() {
  xterm_cmd()
    .args(["--platform", "linux", "show"])
    .assert()
    .success()
    .stdout(predicate::str::contains("atom-xterm.spawnPtySettings.command"))
    .stdout(predicate::str::contains("atom-xterm.terminalSettings.fontSize"))
    .stdout(predicate::str::contains("(8..=100)"));
}

#[test]
fn show_json_output() {
  let output = xterm_cmd()
    .args(["--platform", "win32", "--env", "COMSPEC=pwsh.exe", "show", "--format", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["platform"], "win32");

  let settings = json["settings"].as_array().unwrap();
  assert_eq!(settings.len(), 15);
  assert_eq!(settings[0]["key"], "atom-xterm.spawnPtySettings.command");
  assert_eq!(settings[0]["value"], "pwsh.exe");
  assert_eq!(settings[1]["value"], "[]");
  assert!(json["userDataPath"].as_str().unwrap().ends_with("atom-xterm"));

  let defaults = &json["defaults"];
  assert_eq!(defaults["command"], "pwsh.exe");
  assert_eq!(defaults["args"], serde_json::json!([]));
  assert_eq!(defaults["setEnv"], serde_json::json!({}));
  assert_eq!(defaults["fontSize"], 14);
  assert_eq!(defaults["maximumFontSize"], 100);
  assert_eq!(defaults["userDataPath"], json["userDataPath"]);
}

// =============================================================================
// info & errors
// =============================================================================

#[test]
fn info_shows_platform() {
  xterm_cmd()
    .args(["--platform", "unix", "info"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Platform: unix"));
}

#[test]
fn invalid_env_assignment_fails() {
  xterm_cmd()
    .args(["--env", "NOEQUALS", "show"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn unknown_platform_fails() {
  xterm_cmd()
    .args(["--platform", "beos", "show"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unknown platform 'beos'"));
}

//! Show command implementation.
//!
//! Lists every registered setting with its resolved default.

use anyhow::Result;
use xterm_config::{EnvSource, Resolver};

use crate::output::{OutputFormat, format_setting_value, print_info, print_json, print_setting, print_stat};

pub fn cmd_show<E: EnvSource>(resolver: &Resolver<E>, format: OutputFormat) -> Result<()> {
  let settings = resolver.setting_defaults()?;

  if format.is_json() {
    let defaults = resolver.snapshot();
    let json_output = serde_json::json!({
      "platform": defaults.platform,
      "settings": settings,
      "userDataPath": defaults.user_data_path,
      "defaults": defaults,
    });
    print_json(&json_output)?;
    return Ok(());
  }

  print_info(&format!("Defaults for {}", resolver.os()));
  println!();

  let width = settings.iter().map(|s| s.key.len()).max().unwrap_or(0);
  for setting in &settings {
    let value = format_setting_value(&setting.value.to_string(), setting.minimum, setting.maximum);
    print_setting(&setting.key, &value, width);
  }

  println!();
  print_stat("User data", &resolver.user_data_path().display().to_string());
  Ok(())
}

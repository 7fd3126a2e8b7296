//! CLI output formatting utilities.
//!
//! Colored status messages and aligned `key = value` listings. Colors are only
//! emitted when the target stream supports them.

use anyhow::Context;
use clap::ValueEnum;
use owo_colors::{OwoColorize, Stream};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl OutputFormat {
  pub fn is_json(self) -> bool {
    matches!(self, OutputFormat::Json)
  }
}

pub mod symbols {
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!("  {}: {}", label.if_supports_color(Stream::Stdout, |s| s.dimmed()), value);
}

/// Left-align `key` to `width` columns
pub fn pad_key(key: &str, width: usize) -> String {
  format!("{:width$}", key, width = width)
}

/// Render a setting's value, appending its allowed range when it has one
pub fn format_setting_value(value: &str, minimum: Option<u32>, maximum: Option<u32>) -> String {
  match (minimum, maximum) {
    (Some(min), Some(max)) => format!("{} ({}..={})", value, min, max),
    (Some(min), None) => format!("{} ({}..)", value, min),
    (None, Some(max)) => format!("{} (..={})", value, max),
    (None, None) => value.to_string(),
  }
}

/// Print one setting as `key = value`, with the key padded to `width`
pub fn print_setting(key: &str, value: &str, width: usize) {
  println!(
    "  {} = {}",
    pad_key(key, width).if_supports_color(Stream::Stdout, |s| s.cyan()),
    value
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}

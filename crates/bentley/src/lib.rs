//! Bentley - levelled console logging for the mindtrek tools
//!
//! Every line goes to stderr with a short coloured prefix so that stdout stays
//! free for command output (dashboards, JSON, etc.).
//!
//! Plain functions (`info`, `warn`, `error`, `debug`, `success`, `verbose`) take
//! a message; the macro forms accept `format!` arguments.

use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "daemon-logs")]
pub mod daemon_logs;

/// Severity attached to console lines and daemon log entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Level {
  Verbose,
  Debug,
  Info,
  Success,
  Warn,
  Error,
}

impl Level {
  pub fn as_str(&self) -> &'static str {
    match self {
      Level::Verbose => "verbose",
      Level::Debug => "debug",
      Level::Info => "info",
      Level::Success => "success",
      Level::Warn => "warn",
      Level::Error => "error",
    }
  }

  fn tag(&self) -> &'static str {
    match self {
      Level::Verbose => "verb",
      Level::Debug => "debug",
      Level::Info => "info",
      Level::Success => "sccs",
      Level::Warn => "warn",
      Level::Error => "error",
    }
  }

  fn color(&self) -> Color {
    match self {
      Level::Verbose => Color::Cyan,
      Level::Debug => Color::Magenta,
      Level::Info => Color::Blue,
      Level::Success => Color::Green,
      Level::Warn => Color::Yellow,
      Level::Error => Color::Red,
    }
  }
}

impl fmt::Display for Level {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Level {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "verbose" => Ok(Level::Verbose),
      "debug" => Ok(Level::Debug),
      "info" => Ok(Level::Info),
      "success" => Ok(Level::Success),
      "warn" | "warning" => Ok(Level::Warn),
      "error" => Ok(Level::Error),
      other => Err(format!("unknown log level '{other}'")),
    }
  }
}

/// Raw output, one stderr line per message line
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

/// Prefix padded so messages line up regardless of tag width
fn format_prefix(level: Level) -> String {
  let tag = level.tag();
  format!("[{}]{:<width$}", tag.color(level.color()).bold(), "", width = 7 - tag.len() - 2)
}

/// The console lines for a message, each carrying the level prefix
pub fn format_lines(level: Level, message: &str) -> Vec<String> {
  let prefix = format_prefix(level);
  message.lines().map(|line| format!("{prefix} {line}")).collect()
}

/// Emit a message at the given level, prefixing every line
pub fn emit(level: Level, message: &str) {
  for line in format_lines(level, message) {
    log(&line);
  }
}

pub fn verbose(message: &str) {
  emit(Level::Verbose, message);
}

/// General information
pub fn info(message: &str) {
  emit(Level::Info, message);
}

/// Something needs attention
pub fn warn(message: &str) {
  emit(Level::Warn, message);
}

/// Something went wrong
pub fn error(message: &str) {
  emit(Level::Error, message);
}

pub fn debug(message: &str) {
  emit(Level::Debug, message);
}

/// Something completed successfully
pub fn success(message: &str) {
  emit(Level::Success, message);
}

#[macro_export]
macro_rules! info {
  ($($arg:tt)+) => {
    $crate::info(&format!($($arg)+)) // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! warn {
  ($($arg:tt)+) => {
    $crate::warn(&format!($($arg)+)) // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! error {
  ($($arg:tt)+) => {
    $crate::error(&format!($($arg)+)) // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! verbose {
  ($($arg:tt)+) => {
    $crate::verbose(&format!($($arg)+)) // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! debug {
  ($($arg:tt)+) => {
    $crate::debug(&format!($($arg)+)) // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! success {
  ($($arg:tt)+) => {
    $crate::success(&format!($($arg)+)) // LCOV_EXCL_LINE
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_level_round_trips_through_str() {
    for level in
      [Level::Verbose, Level::Debug, Level::Info, Level::Success, Level::Warn, Level::Error]
    {
      assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
    }
  }

  #[test]
  fn test_level_accepts_warning_alias() {
    assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
    assert!("loud".parse::<Level>().is_err());
  }

  #[test]
  fn test_level_serializes_lowercase() {
    let json = serde_json::to_string(&Level::Success).unwrap();
    assert_eq!(json, "\"success\"");
  }

  #[test]
  fn test_prefix_pads_short_tags() {
    colored::control::set_override(false);
    assert_eq!(format_prefix(Level::Info), "[info] ");
    assert_eq!(format_prefix(Level::Error), "[error]");
  }
}

//! ## Features
//!
//! - Prefixed, colored status lines on stderr (info, warn, error, debug, success)
//! - Multi-line message support with consistent formatting
//! - One-call `tracing` subscriber setup for the workspace binaries
//!
//! ## Usage
//!
//! Status output: `info()`, `warn()`, `error()`, `debug()`, `success()`, or the
//! macro forms, which also accept format arguments:
//!
//! ```ignore
//! bentley::success!("Added {} to the shelf", title);
//! ```
//!
//! Diagnostics inside library code go through `tracing`; call `init_tracing()`
//! once from `main` to route them to stderr.

use colored::*;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
  Info,
  Warn,
  Error,
  Debug,
  Success,
}

impl Level {
  fn tag(self) -> &'static str {
    match self {
      Level::Info => "info",
      Level::Warn => "warn",
      Level::Error => "error",
      Level::Debug => "debug",
      Level::Success => "sccs",
    }
  }

  fn color(self) -> Color {
    match self {
      Level::Info => Color::Blue,
      Level::Warn => Color::Yellow,
      Level::Error => Color::Red,
      Level::Debug => Color::Magenta,
      Level::Success => Color::Green,
    }
  }
}

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `component` logs at info (debug when
/// `verbose`) and everything else at warn. Calling this twice is harmless.
pub fn init_tracing(component: &str, verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    if verbose {
      EnvFilter::new(format!("{component}=debug,info"))
    } else {
      EnvFilter::new(format!("{component}=info,warn"))
    }
  });

  let _ = tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
    .with(filter)
    .try_init();
}

/// Build the prefixed lines for a message without printing them
pub fn format_lines(level: Level, message: &str) -> Vec<String> {
  let tag = level.tag();
  let pad = " ".repeat(6usize.saturating_sub(tag.len()));
  let prefix = format!("[{}]{pad}", tag.color(level.color()).bold());

  message.lines().map(|line| format!("{prefix}{line}")).collect()
}

/// Write a message at the given level to stderr, one prefixed line per input line
pub fn emit(level: Level, message: &str) {
  for line in format_lines(level, message) {
    eprintln!("{line}");
  }
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

/// Macros for coverage-excluded logging - these expand with LCOV_EXCL_LINE at call sites
#[macro_export]
macro_rules! info {
  ($fmt:literal $(, $arg:expr)* $(,)?) => {
    $crate::info(&format!($fmt $(, $arg)*)); // LCOV_EXCL_LINE
  };
  ($msg:expr) => {
    $crate::info($msg); // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! warn {
  ($fmt:literal $(, $arg:expr)* $(,)?) => {
    $crate::warn(&format!($fmt $(, $arg)*)); // LCOV_EXCL_LINE
  };
  ($msg:expr) => {
    $crate::warn($msg); // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! error {
  ($fmt:literal $(, $arg:expr)* $(,)?) => {
    $crate::error(&format!($fmt $(, $arg)*)); // LCOV_EXCL_LINE
  };
  ($msg:expr) => {
    $crate::error($msg); // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! debug {
  ($fmt:literal $(, $arg:expr)* $(,)?) => {
    $crate::debug(&format!($fmt $(, $arg)*)); // LCOV_EXCL_LINE
  };
  ($msg:expr) => {
    $crate::debug($msg); // LCOV_EXCL_LINE
  };
}

#[macro_export]
macro_rules! success {
  ($fmt:literal $(, $arg:expr)* $(,)?) => {
    $crate::success(&format!($fmt $(, $arg)*)); // LCOV_EXCL_LINE
  };
  ($msg:expr) => {
    $crate::success($msg); // LCOV_EXCL_LINE
  };
}

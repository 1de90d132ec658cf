//! Error types for relman with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and maps
//! each category to a stable process exit code. Validation failures carry the
//! full violation list so everything wrong with a manifest is reported at once.

use crate::manifest::validate::Violation;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for relman
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad flags, unreadable definition, malformed manifest file)
  User = 1,
  /// System error (I/O, serialization)
  System = 2,
  /// Validation failure (manifest violates structural invariants)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for relman
#[derive(Debug)]
pub enum RelmanError {
  /// Manifest failed validation; carries every violation found
  Validation { violations: Vec<Violation> },

  /// Product definition file could not be loaded or parsed
  Definition { path: PathBuf, message: String },

  /// JSON encoding/decoding errors
  Json(serde_json::Error),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional help text
  Message { message: String, help: Option<String> },
}

impl RelmanError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    RelmanError::Message {
      message: msg.into(),
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    RelmanError::Message {
      message: msg.into(),
      help: Some(help.into()),
    }
  }

  /// Create a validation error from a non-empty violation list
  pub fn validation(violations: Vec<Violation>) -> Self {
    RelmanError::Validation { violations }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      RelmanError::Validation { .. } => ExitCode::Validation,
      RelmanError::Definition { .. } => ExitCode::User,
      RelmanError::Json(_) => ExitCode::System,
      RelmanError::Io(_) => ExitCode::System,
      RelmanError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      RelmanError::Validation { .. } => {
        Some("Fix the product definition so that every invariant holds, then re-run.".to_string())
      }
      RelmanError::Definition { .. } => {
        Some("Check the definition file path and its TOML structure.".to_string())
      }
      RelmanError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for RelmanError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RelmanError::Validation { violations } => {
        writeln!(
          f,
          "release manifest failed validation with {} violation(s):",
          violations.len()
        )?;
        for violation in violations {
          writeln!(f, "  - {}", violation)?;
        }
        Ok(())
      }
      RelmanError::Definition { path, message } => {
        write!(f, "invalid product definition {}: {}", path.display(), message)
      }
      RelmanError::Json(e) => write!(f, "JSON error: {}", e),
      RelmanError::Io(e) => write!(f, "I/O error: {}", e),
      RelmanError::Message { message, .. } => write!(f, "{}", message),
    }
  }
}

impl std::error::Error for RelmanError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      RelmanError::Json(e) => Some(e),
      RelmanError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for RelmanError {
  fn from(err: io::Error) -> Self {
    RelmanError::Io(err)
  }
}

impl From<serde_json::Error> for RelmanError {
  fn from(err: serde_json::Error) -> Self {
    RelmanError::Json(err)
  }
}

impl From<toml_edit::de::Error> for RelmanError {
  fn from(err: toml_edit::de::Error) -> Self {
    RelmanError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for RelmanError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    RelmanError::message(format!("UTF-8 conversion error: {}", err))
  }
}

impl From<String> for RelmanError {
  fn from(msg: String) -> Self {
    RelmanError::message(msg)
  }
}

impl From<&str> for RelmanError {
  fn from(msg: &str) -> Self {
    RelmanError::message(msg)
  }
}

/// Result type alias for relman
pub type RelmanResult<T> = Result<T, RelmanError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> RelmanResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<RelmanError>,
{
  fn with_context<F>(self, f: F) -> RelmanResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| {
      let inner = e.into();
      RelmanError::message(format!("{}: {}", f(), inner))
    })
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &RelmanError) {
  eprintln!("\n❌ {}", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}

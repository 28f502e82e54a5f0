/*!
Error types for MWC operations.

[`MwcError`] pairs an [`ErrorKind`] with the backtrace taken where the error
was created. Capture honours `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE` unless
[`force_backtraces`] has switched it on for the whole process.
*/

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::a11y::ValueKind;

static FORCE_BACKTRACES: AtomicBool = AtomicBool::new(false);

/// Capture a backtrace for every error created from now on, regardless of
/// `RUST_BACKTRACE`.
pub fn force_backtraces() {
  FORCE_BACKTRACES.store(true, Ordering::Relaxed);
}

fn capture() -> Backtrace {
  if FORCE_BACKTRACES.load(Ordering::Relaxed) {
    Backtrace::force_capture()
  } else {
    Backtrace::capture()
  }
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
  #[error("Permission required: System Settings -> Privacy and Security -> Accessibility")]
  PermissionDenied,

  #[error("{0} not found")]
  NotFound(String),

  #[error("{0}")]
  Validation(String),

  #[error("Invalid JSON: {0}")]
  Decoding(String),

  #[error("Invalid type for attr [{attr}]: expected {expected}, got {got}")]
  TypeMismatch {
    attr: String,
    expected: ValueKind,
    got: ValueKind,
  },

  #[error("Failed to {op}: {code}")]
  Accessibility { op: String, code: i32 },

  #[error("Failed to find {0} function")]
  SymbolMissing(&'static str),

  #[error("{0} unavailable")]
  Unavailable(String),

  #[error("Operation not supported: {0}")]
  NotSupported(String),

  #[error("Internal error: {0}")]
  Internal(String),
}

impl ErrorKind {
  /// Error class name reported to bridge hosts.
  pub const fn class(&self) -> &'static str {
    match self {
      Self::PermissionDenied => "PermError",
      Self::NotFound(_) => "NotFoundError",
      Self::Validation(_) => "ValidationError",
      Self::Decoding(_) => "DecodingError",
      Self::TypeMismatch { .. }
      | Self::Accessibility { .. }
      | Self::SymbolMissing(_)
      | Self::Unavailable(_)
      | Self::NotSupported(_)
      | Self::Internal(_) => "MWCError",
    }
  }
}

/// Errors that can occur during MWC operations.
#[derive(thiserror::Error)]
#[error("{kind}")]
pub struct MwcError {
  kind: ErrorKind,
  trace: Box<Backtrace>,
}

/// Debug shows the kind only; the backtrace is reached through [`MwcError::backtrace`].
impl fmt::Debug for MwcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&self.kind, f)
  }
}

impl From<ErrorKind> for MwcError {
  fn from(kind: ErrorKind) -> Self {
    Self {
      kind,
      trace: Box::new(capture()),
    }
  }
}

impl MwcError {
  pub fn permission_denied() -> Self {
    ErrorKind::PermissionDenied.into()
  }

  pub fn not_found(what: impl Into<String>) -> Self {
    ErrorKind::NotFound(what.into()).into()
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    ErrorKind::Validation(msg.into()).into()
  }

  pub fn decoding(msg: impl Into<String>) -> Self {
    ErrorKind::Decoding(msg.into()).into()
  }

  pub fn type_mismatch(attr: impl Into<String>, expected: ValueKind, got: ValueKind) -> Self {
    ErrorKind::TypeMismatch {
      attr: attr.into(),
      expected,
      got,
    }
    .into()
  }

  pub fn accessibility(op: impl Into<String>, code: i32) -> Self {
    ErrorKind::Accessibility { op: op.into(), code }.into()
  }

  pub fn symbol_missing(symbol: &'static str) -> Self {
    ErrorKind::SymbolMissing(symbol).into()
  }

  pub fn unavailable(what: impl Into<String>) -> Self {
    ErrorKind::Unavailable(what.into()).into()
  }

  pub fn not_supported(what: impl Into<String>) -> Self {
    ErrorKind::NotSupported(what.into()).into()
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    ErrorKind::Internal(msg.into()).into()
  }

  pub const fn kind(&self) -> &ErrorKind {
    &self.kind
  }

  /// Error class name reported to bridge hosts.
  pub const fn class(&self) -> &'static str {
    self.kind.class()
  }

  /// Where the error was created. Disabled unless capture was on at the time.
  pub fn backtrace(&self) -> &Backtrace {
    &self.trace
  }

  /// Backtrace frames, one per line. Empty when nothing was captured.
  pub fn stack(&self) -> Vec<String> {
    if self.trace.status() != BacktraceStatus::Captured {
      return Vec::new();
    }
    self
      .trace
      .to_string()
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .map(str::to_owned)
      .collect()
  }
}

/// Result type for MWC operations.
pub type MwcResult<T> = Result<T, MwcError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classes_follow_error_taxonomy() {
    assert_eq!(MwcError::permission_denied().class(), "PermError");
    assert_eq!(MwcError::not_found("App").class(), "NotFoundError");
    assert_eq!(MwcError::validation("bad").class(), "ValidationError");
    assert_eq!(MwcError::decoding("eof").class(), "DecodingError");
    assert_eq!(MwcError::symbol_missing("CGSGetZoomParameters").class(), "MWCError");
  }

  #[test]
  fn messages_read_naturally() {
    assert_eq!(MwcError::not_found("App").to_string(), "App not found");
    assert_eq!(
      MwcError::symbol_missing("CGSSetZoomParameters").to_string(),
      "Failed to find CGSSetZoomParameters function"
    );
    let err = MwcError::type_mismatch("AXTitle", ValueKind::String, ValueKind::Number);
    assert_eq!(
      err.to_string(),
      "Invalid type for attr [AXTitle]: expected string, got number"
    );
  }

  #[test]
  fn debug_is_the_kind() {
    assert_eq!(format!("{:?}", MwcError::not_found("Window")), "NotFound(\"Window\")");
  }

  #[test]
  fn stack_records_the_creating_frame() {
    fn fails_here() -> MwcResult<()> {
      Err(MwcError::validation("bad"))
    }
    force_backtraces();
    let err = fails_here().unwrap_err();
    let stack = err.stack();
    assert!(
      stack.iter().any(|frame| frame.contains("fails_here")),
      "stack: {stack:#?}"
    );
  }
}

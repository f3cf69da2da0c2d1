//! The observability sink handed to both pipeline components.
//!
//! Components never touch process-global logging state; they write through
//! a `Reporter` chosen by the caller. The binary backs it with `tracing`,
//! tests use the no-op implementation.

/// Minimal leveled message sink.
pub trait Reporter {
  fn info(&self, message: &str);
  fn warn(&self, message: &str);
  fn error(&self, message: &str);
}

/// Forwards every message to the corresponding `tracing` macro.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
  fn info(&self, message: &str) {
    tracing::info!("{message}");
  }

  fn warn(&self, message: &str) {
    tracing::warn!("{message}");
  }

  fn error(&self, message: &str) {
    tracing::error!("{message}");
  }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
  fn info(&self, _message: &str) {}
  fn warn(&self, _message: &str) {}
  fn error(&self, _message: &str) {}
}

//! The loader's run report.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one loader run.
///
/// Files that loaded fully appear in `loaded` with their total row count;
/// files abandoned after an error appear in `failed` with the error
/// message. A file can appear in only one of the two maps.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
  /// Rows written per fully-loaded file, keyed by file name.
  pub loaded:       BTreeMap<String, u64>,
  /// Error message per abandoned file, keyed by file name.
  pub failed:       BTreeMap<String, String>,
  /// When the run started.
  pub started_at:   DateTime<Utc>,
  /// Wall time of the whole run.
  pub elapsed_secs: f64,
}

impl IngestReport {
  /// A fresh report with the given start time and nothing recorded yet.
  pub fn started(at: DateTime<Utc>) -> Self {
    Self {
      loaded:       BTreeMap::new(),
      failed:       BTreeMap::new(),
      started_at:   at,
      elapsed_secs: 0.0,
    }
  }

  /// Total rows written across all loaded files.
  pub fn total_rows(&self) -> u64 {
    self.loaded.values().sum()
  }
}

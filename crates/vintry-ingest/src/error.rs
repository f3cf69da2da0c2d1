//! Error type for `vintry-ingest`.
//!
//! Loader errors are scoped to a single source file: the caller records
//! them and moves on to the next file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("batch shape error: {0}")]
  Core(#[from] vintry_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

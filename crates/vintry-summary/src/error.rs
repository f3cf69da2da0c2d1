//! Error type for `vintry-summary`.
//!
//! Unlike loader errors, these abort the build: a missing base table or a
//! malformed row is a defect in the loaded data, not an input to skip.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] vintry_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("Volume value {0:?} is not numeric")]
  VolumeNotNumeric(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

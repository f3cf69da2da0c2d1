//! Error types for `vintry-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("row has {got} cells, batch has {expected} columns")]
  ColumnCountMismatch { expected: usize, got: usize },

  #[error("column has {got} values for {expected} rows")]
  ColumnLengthMismatch { expected: usize, got: usize },

  #[error("column not found: {0:?}")]
  ColumnNotFound(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

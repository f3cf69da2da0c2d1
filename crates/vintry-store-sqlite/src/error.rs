//! Error type for `vintry-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] vintry_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A table cannot be created from a batch that has no columns.
  #[error("cannot create table {0:?} from a batch with no columns")]
  EmptySchema(String),

  #[error("unsupported column type in query result: {0}")]
  UnsupportedColumnType(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

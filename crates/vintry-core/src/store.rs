//! The `TableStore` trait — the seam between the pipeline and its storage
//! backend.
//!
//! The trait is implemented by storage backends (e.g.
//! `vintry-store-sqlite`). The loader and the summary builder depend on
//! this abstraction, not on any concrete engine.

use std::future::Future;

use crate::batch::Batch;

/// Abstraction over a tabular storage backend.
///
/// Three operations carry the whole pipeline: drop-and-recreate a table
/// from a batch, append a batch to an existing table, and run an arbitrary
/// read query. Replacing and appending with the same batch sequence is how
/// a source file's table is written: the first batch replaces, the rest
/// append.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait TableStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Drop `table` if it exists, recreate it with the batch's columns, and
  /// insert the batch's rows. The batch must have at least one column.
  fn replace<'a>(
    &'a self,
    table: &'a str,
    batch: &'a Batch,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Append the batch's rows to an existing `table`. Errors if the table
  /// does not exist.
  fn append<'a>(
    &'a self,
    table: &'a str,
    batch: &'a Batch,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Run `sql` and return the full result set.
  fn query<'a>(
    &'a self,
    sql: &'a str,
  ) -> impl Future<Output = Result<Batch, Self::Error>> + Send + 'a;
}

//! Bulk CSV loader for the Vintry pipeline.
//!
//! Reads each source file in fixed-size row batches and writes every batch
//! to a table named after the file — replacing the table on the first
//! batch, appending thereafter — so peak memory stays bounded regardless
//! of file size.

mod batches;
mod loader;
mod report;

pub mod error;

pub use batches::{CsvBatches, DEFAULT_BATCH_SIZE};
pub use error::{Error, Result};
pub use loader::{IngestOptions, ingest_dir};
pub use report::IngestReport;

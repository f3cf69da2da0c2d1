//! [`CsvBatches`] — a finite, lazy sequence of fixed-size row batches read
//! from a CSV file.
//!
//! Reading is decoupled from writing: whoever consumes the iterator
//! decides what happens to each batch. The sequence is restartable only
//! from the source file — build a new `CsvBatches` to read again.

use std::{fs::File, path::Path};

use vintry_core::{batch::Batch, value::Value};

use crate::Result;

/// Default rows per batch; bounds peak memory during a load.
pub const DEFAULT_BATCH_SIZE: usize = 20_000;

pub struct CsvBatches {
  reader:     csv::Reader<File>,
  columns:    Vec<String>,
  batch_size: usize,
  done:       bool,
}

impl CsvBatches {
  /// Open `path` and read its header row. `batch_size` is clamped to at
  /// least one row.
  pub fn open(path: &Path, batch_size: usize) -> Result<Self> {
    let mut reader = csv::ReaderBuilder::new().from_path(path)?;
    let columns = reader.headers()?.iter().map(str::to_owned).collect();
    Ok(Self {
      reader,
      columns,
      batch_size: batch_size.max(1),
      done: false,
    })
  }

  /// Column names from the header row.
  pub fn columns(&self) -> &[String] { &self.columns }
}

impl Iterator for CsvBatches {
  type Item = Result<Batch>;

  /// Pull up to `batch_size` records into the next batch.
  ///
  /// Returns `None` once the file is exhausted. A read error (I/O, ragged
  /// row) is yielded once and ends the sequence; rows already collected
  /// into the failing batch are discarded with it.
  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }

    let mut batch = Batch::new(self.columns.clone());
    let mut record = csv::StringRecord::new();

    while batch.len() < self.batch_size {
      match self.reader.read_record(&mut record) {
        Ok(true) => {
          let row = record.iter().map(Value::infer).collect();
          if let Err(e) = batch.push_row(row) {
            self.done = true;
            return Some(Err(e.into()));
          }
        }
        Ok(false) => {
          self.done = true;
          break;
        }
        Err(e) => {
          self.done = true;
          return Some(Err(e.into()));
        }
      }
    }

    if batch.is_empty() { None } else { Some(Ok(batch)) }
  }
}

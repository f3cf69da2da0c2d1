//! The bulk loader: every recognised file in a directory into its own
//! table.

use std::{
  path::{Path, PathBuf},
  time::Instant,
};

use chrono::Utc;
use vintry_core::{
  naming::{TABULAR_EXT, table_name_for},
  report::Reporter,
  store::TableStore,
};

use crate::{
  Error, Result,
  batches::{CsvBatches, DEFAULT_BATCH_SIZE},
  report::IngestReport,
};

/// Loader tunables.
#[derive(Debug, Clone)]
pub struct IngestOptions {
  /// Maximum rows held in memory per file at any moment.
  pub batch_size: usize,
}

impl Default for IngestOptions {
  fn default() -> Self {
    Self { batch_size: DEFAULT_BATCH_SIZE }
  }
}

/// Load every recognised file in `dir` into the store, one table per file.
///
/// Never fails as a whole: a missing or unreadable directory yields an
/// empty report, and a file that errors part-way is recorded and skipped
/// while the remaining files proceed. A skipped file's table may be left
/// holding the batches written before the error.
pub async fn ingest_dir<S, R>(
  store: &S,
  reporter: &R,
  dir: &Path,
  options: &IngestOptions,
) -> IngestReport
where
  S: TableStore,
  R: Reporter,
{
  let start = Instant::now();
  let mut report = IngestReport::started(Utc::now());

  match list_source_files(dir) {
    Err(e) => {
      reporter.warn(&format!(
        "source directory {} is unavailable: {e}",
        dir.display()
      ));
    }
    Ok(files) if files.is_empty() => {
      reporter.warn(&format!(
        "no .{TABULAR_EXT} files found in {}",
        dir.display()
      ));
    }
    Ok(files) => {
      reporter.info(&format!(
        "found {} source files in {}",
        files.len(),
        dir.display()
      ));

      for (path, table) in files {
        let file_name = path
          .file_name()
          .map(|n| n.to_string_lossy().into_owned())
          .unwrap_or_else(|| path.display().to_string());

        match load_file(
          store,
          reporter,
          &path,
          &table,
          &file_name,
          options.batch_size,
        )
        .await
        {
          Ok(rows) => {
            reporter.info(&format!("completed {file_name}: {rows} rows"));
            report.loaded.insert(file_name, rows);
          }
          Err(e) => {
            reporter.error(&format!("error processing {file_name}: {e}"));
            report.failed.insert(file_name, e.to_string());
          }
        }
      }

      reporter.info(&format!(
        "ingestion complete: {} rows across {} files in {:.2}s",
        report.total_rows(),
        report.loaded.len(),
        start.elapsed().as_secs_f64()
      ));
    }
  }

  report.elapsed_secs = start.elapsed().as_secs_f64();
  report
}

/// Load one file. The first batch replaces the destination table; the rest
/// append. Any error abandons the file.
async fn load_file<S, R>(
  store: &S,
  reporter: &R,
  path: &Path,
  table: &str,
  file_name: &str,
  batch_size: usize,
) -> Result<u64>
where
  S: TableStore,
  R: Reporter,
{
  let batches = CsvBatches::open(path, batch_size)?;
  let mut total: u64 = 0;

  for (index, batch) in batches.enumerate() {
    let batch = batch?;
    reporter.info(&format!(
      "{file_name}: batch {index} ({} rows x {} cols)",
      batch.len(),
      batch.width()
    ));

    if index == 0 {
      store
        .replace(table, &batch)
        .await
        .map_err(|e| Error::Store(Box::new(e)))?;
    } else {
      store
        .append(table, &batch)
        .await
        .map_err(|e| Error::Store(Box::new(e)))?;
    }
    total += batch.len() as u64;
  }

  Ok(total)
}

/// Recognised files in `dir`, sorted by path for a stable load order.
fn list_source_files(dir: &Path) -> std::io::Result<Vec<(PathBuf, String)>> {
  let mut files = Vec::new();
  for entry in std::fs::read_dir(dir)? {
    let entry = entry?;
    let path = entry.path();
    if !path.is_file() {
      continue;
    }
    if let Some(table) = table_name_for(&path) {
      files.push((path, table));
    }
  }
  files.sort();
  Ok(files)
}

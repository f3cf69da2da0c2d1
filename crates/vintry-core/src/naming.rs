//! Mapping from source file names to destination table names.

use std::path::Path;

/// File extension recognised as ingestable tabular data.
pub const TABULAR_EXT: &str = "csv";

/// Destination table name for a source file, or `None` when the file does
/// not carry the recognised extension.
///
/// The name is the file stem verbatim: `sales.csv` loads into `sales`.
/// Two files whose names differ only in extension case (`sales.csv`,
/// `sales.CSV`) map to the same table and will overwrite one another
/// within a run — callers see this, the function does not resolve it.
pub fn table_name_for(path: &Path) -> Option<String> {
  let ext = path.extension()?;
  if !ext.eq_ignore_ascii_case(TABULAR_EXT) {
    return None;
  }
  Some(path.file_stem()?.to_string_lossy().into_owned())
}

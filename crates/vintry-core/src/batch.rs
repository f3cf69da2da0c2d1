//! [`Batch`] — a fixed-width slab of rows moving through the pipeline.

use crate::{Error, Result, value::Value};

/// An ordered set of named columns plus zero or more rows.
///
/// Invariant: every row has exactly `columns.len()` cells. The mutating
/// methods enforce it; accessors can rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
  columns: Vec<String>,
  rows:    Vec<Vec<Value>>,
}

impl Batch {
  /// An empty batch with the given column names.
  pub fn new(columns: Vec<String>) -> Self {
    Self { columns, rows: Vec::new() }
  }

  /// Build a batch from pre-assembled rows, verifying each row's width.
  pub fn from_rows(
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
  ) -> Result<Self> {
    let mut batch = Self::new(columns);
    for row in rows {
      batch.push_row(row)?;
    }
    Ok(batch)
  }

  /// Append a row; errors if its width does not match the header.
  pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
    if row.len() != self.columns.len() {
      return Err(Error::ColumnCountMismatch {
        expected: self.columns.len(),
        got:      row.len(),
      });
    }
    self.rows.push(row);
    Ok(())
  }

  /// Append a named column; `values` must have one entry per existing row.
  pub fn push_column(
    &mut self,
    name: impl Into<String>,
    values: Vec<Value>,
  ) -> Result<()> {
    if values.len() != self.rows.len() {
      return Err(Error::ColumnLengthMismatch {
        expected: self.rows.len(),
        got:      values.len(),
      });
    }
    self.columns.push(name.into());
    for (row, value) in self.rows.iter_mut().zip(values) {
      row.push(value);
    }
    Ok(())
  }

  pub fn columns(&self) -> &[String] { &self.columns }

  pub fn rows(&self) -> &[Vec<Value>] { &self.rows }

  /// Cell-level mutable access. Rows must keep their width.
  pub fn rows_mut(&mut self) -> &mut [Vec<Value>] { &mut self.rows }

  /// Number of rows.
  pub fn len(&self) -> usize { self.rows.len() }

  pub fn is_empty(&self) -> bool { self.rows.is_empty() }

  /// Number of columns.
  pub fn width(&self) -> usize { self.columns.len() }

  /// Index of a named column.
  pub fn column_index(&self, name: &str) -> Result<usize> {
    self
      .columns
      .iter()
      .position(|c| c == name)
      .ok_or_else(|| Error::ColumnNotFound(name.to_owned()))
  }
}

#[cfg(test)]
mod tests {
  use super::Batch;
  use crate::{Error, value::Value};

  fn header() -> Vec<String> {
    vec!["a".into(), "b".into()]
  }

  #[test]
  fn push_row_rejects_wrong_width() {
    let mut batch = Batch::new(header());
    let err = batch.push_row(vec![Value::Integer(1)]).unwrap_err();
    assert!(matches!(
      err,
      Error::ColumnCountMismatch { expected: 2, got: 1 }
    ));
  }

  #[test]
  fn push_column_extends_every_row() {
    let mut batch = Batch::from_rows(header(), vec![
      vec![Value::Integer(1), Value::Integer(2)],
      vec![Value::Integer(3), Value::Integer(4)],
    ])
    .unwrap();

    batch
      .push_column("c", vec![Value::Real(0.5), Value::Real(1.5)])
      .unwrap();

    assert_eq!(batch.width(), 3);
    assert!(batch.rows().iter().all(|r| r.len() == 3));
    assert_eq!(batch.rows()[1][2], Value::Real(1.5));
  }

  #[test]
  fn push_column_rejects_wrong_length() {
    let mut batch = Batch::from_rows(header(), vec![vec![
      Value::Integer(1),
      Value::Integer(2),
    ]])
    .unwrap();

    let err = batch.push_column("c", vec![]).unwrap_err();
    assert!(matches!(
      err,
      Error::ColumnLengthMismatch { expected: 1, got: 0 }
    ));
  }

  #[test]
  fn column_index_by_name() {
    let batch = Batch::new(header());
    assert_eq!(batch.column_index("b").unwrap(), 1);
    assert!(matches!(
      batch.column_index("z").unwrap_err(),
      Error::ColumnNotFound(_)
    ));
  }
}

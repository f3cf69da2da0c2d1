//! Conversions between the pipeline's dynamic [`Value`]s and SQLite's
//! value model, plus identifier quoting and column-affinity inference.

use vintry_core::{batch::Batch, value::Value};

use crate::{Error, Result};

/// Quote an identifier for use in generated SQL.
///
/// Table names come from file names and column names from CSV headers, so
/// neither can be bound as a statement parameter. Embedded double quotes
/// are doubled per the SQL standard.
pub fn quote_ident(name: &str) -> String {
  format!("\"{}\"", name.replace('"', "\"\""))
}

/// Declared affinity for a batch column, inferred from the values the
/// first batch carries: any text makes it TEXT, otherwise any real makes
/// it REAL, otherwise INTEGER. An all-null column defaults to TEXT.
///
/// SQLite does not enforce the declared type, so later batches whose cells
/// diverge still insert cleanly.
pub fn column_affinity(batch: &Batch, index: usize) -> &'static str {
  let mut affinity = None;
  for row in batch.rows() {
    match (&row[index], affinity) {
      (Value::Text(_), _) => return "TEXT",
      (Value::Real(_), _) => affinity = Some("REAL"),
      (Value::Integer(_), None) => affinity = Some("INTEGER"),
      _ => {}
    }
  }
  affinity.unwrap_or("TEXT")
}

pub fn encode_value(value: &Value) -> rusqlite::types::Value {
  match value {
    Value::Null => rusqlite::types::Value::Null,
    Value::Integer(i) => rusqlite::types::Value::Integer(*i),
    Value::Real(r) => rusqlite::types::Value::Real(*r),
    Value::Text(s) => rusqlite::types::Value::Text(s.clone()),
  }
}

pub fn decode_value(value: rusqlite::types::Value) -> Result<Value> {
  match value {
    rusqlite::types::Value::Null => Ok(Value::Null),
    rusqlite::types::Value::Integer(i) => Ok(Value::Integer(i)),
    rusqlite::types::Value::Real(r) => Ok(Value::Real(r)),
    rusqlite::types::Value::Text(s) => Ok(Value::Text(s)),
    rusqlite::types::Value::Blob(_) => {
      Err(Error::UnsupportedColumnType("BLOB"))
    }
  }
}

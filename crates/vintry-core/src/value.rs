//! The dynamic cell value model.
//!
//! Source files carry no type declarations, so every cell is inferred from
//! its text at read time and travels through the pipeline as a [`Value`].

/// A single dynamically-typed cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Null,
  Integer(i64),
  Real(f64),
  Text(String),
}

impl Value {
  /// Infer a value from a raw CSV field.
  ///
  /// An empty field becomes [`Value::Null`]; otherwise integer parsing is
  /// tried before float, and anything unparsable stays text verbatim.
  pub fn infer(raw: &str) -> Self {
    if raw.is_empty() {
      return Value::Null;
    }
    if let Ok(i) = raw.parse::<i64>() {
      return Value::Integer(i);
    }
    if let Ok(r) = raw.parse::<f64>() {
      return Value::Real(r);
    }
    Value::Text(raw.to_owned())
  }

  pub fn is_null(&self) -> bool { matches!(self, Value::Null) }

  /// Numeric view: integers widen to float; text and null are `None`.
  pub fn as_f64(&self) -> Option<f64> {
    match self {
      Value::Integer(i) => Some(*i as f64),
      Value::Real(r) => Some(*r),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::Text(s) => Some(s),
      _ => None,
    }
  }
}

//! Profitability metrics derived from a joined summary row.

/// The four derived columns appended to every summary row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
  pub gross_profit:            f64,
  pub profit_margin:           f64,
  pub stock_turnover:          f64,
  pub sales_to_purchase_ratio: f64,
}

impl DerivedMetrics {
  /// Compute the metrics from a row's aggregate totals.
  ///
  /// A ratio with a zero denominator evaluates to 0.0 rather than an IEEE
  /// sentinel: SQLite stores NaN as NULL, and the cleaned summary must not
  /// contain absent values.
  pub fn from_totals(
    sales_dollars: f64,
    purchase_dollars: f64,
    sales_quantity: f64,
    purchase_quantity: f64,
  ) -> Self {
    let gross_profit = sales_dollars - purchase_dollars;
    Self {
      gross_profit,
      profit_margin: ratio(gross_profit * 100.0, sales_dollars),
      stock_turnover: ratio(sales_quantity, purchase_quantity),
      sales_to_purchase_ratio: ratio(sales_dollars, purchase_dollars),
    }
  }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
  if denominator == 0.0 { 0.0 } else { numerator / denominator }
}

#[cfg(test)]
mod tests {
  use super::DerivedMetrics;

  #[test]
  fn metrics_from_known_totals() {
    let m = DerivedMetrics::from_totals(1000.0, 600.0, 50.0, 100.0);
    assert_eq!(m.gross_profit, 400.0);
    assert_eq!(m.profit_margin, 40.0);
    assert_eq!(m.stock_turnover, 0.5);
    assert!((m.sales_to_purchase_ratio - 5.0 / 3.0).abs() < 1e-12);
  }

  #[test]
  fn zero_sales_dollars_clamps_ratios() {
    let m = DerivedMetrics::from_totals(0.0, 600.0, 0.0, 100.0);
    assert_eq!(m.gross_profit, -600.0);
    assert_eq!(m.profit_margin, 0.0);
    assert_eq!(m.sales_to_purchase_ratio, 0.0);
  }

  #[test]
  fn zero_purchase_quantity_clamps_turnover() {
    let m = DerivedMetrics::from_totals(100.0, 50.0, 10.0, 0.0);
    assert_eq!(m.stock_turnover, 0.0);
  }

  #[test]
  fn zero_purchase_dollars_clamps_sales_to_purchase_ratio() {
    let m = DerivedMetrics::from_totals(100.0, 0.0, 10.0, 5.0);
    assert_eq!(m.sales_to_purchase_ratio, 0.0);
  }
}

//! Stage B — row-level cleaning and derived-metric computation.
//!
//! A pure transform over the joined batch; no I/O. The operations run in a
//! fixed order: Volume coercion, null fill, name trims, then the four
//! derived columns.

use vintry_core::{batch::Batch, metrics::DerivedMetrics, value::Value};

use crate::{Error, Result};

const VOLUME: &str = "Volume";
const VENDOR_NAME: &str = "VendorName";
const DESCRIPTION: &str = "Description";
const TOTAL_PURCHASE_QUANTITY: &str = "TotalPurchaseQuantity";
const TOTAL_PURCHASE_DOLLARS: &str = "TotalPurchaseDollars";
const TOTAL_SALES_QUANTITY: &str = "TotalSalesQuantity";
const TOTAL_SALES_DOLLARS: &str = "TotalSalesDollars";

/// Clean the joined summary batch and append the derived metrics.
///
/// After this returns no cell is null: unmatched join columns are zeroed,
/// and Volume — which some exports carry as text — is numeric.
pub fn clean(mut batch: Batch) -> Result<Batch> {
  let volume = batch.column_index(VOLUME)?;
  let vendor_name = batch.column_index(VENDOR_NAME)?;
  let description = batch.column_index(DESCRIPTION)?;
  let purchase_quantity = batch.column_index(TOTAL_PURCHASE_QUANTITY)?;
  let purchase_dollars = batch.column_index(TOTAL_PURCHASE_DOLLARS)?;
  let sales_quantity = batch.column_index(TOTAL_SALES_QUANTITY)?;
  let sales_dollars = batch.column_index(TOTAL_SALES_DOLLARS)?;

  for row in batch.rows_mut() {
    let coerced = coerce_volume(&row[volume])?;
    row[volume] = coerced;

    for cell in row.iter_mut() {
      if cell.is_null() {
        *cell = Value::Real(0.0);
      }
    }

    for &i in &[vendor_name, description] {
      if let Value::Text(s) = &mut row[i] {
        let trimmed = s.trim().to_owned();
        *s = trimmed;
      }
    }
  }

  let mut gross_profit = Vec::with_capacity(batch.len());
  let mut profit_margin = Vec::with_capacity(batch.len());
  let mut stock_turnover = Vec::with_capacity(batch.len());
  let mut sales_to_purchase = Vec::with_capacity(batch.len());

  for row in batch.rows() {
    let m = DerivedMetrics::from_totals(
      numeric(&row[sales_dollars]),
      numeric(&row[purchase_dollars]),
      numeric(&row[sales_quantity]),
      numeric(&row[purchase_quantity]),
    );
    gross_profit.push(Value::Real(m.gross_profit));
    profit_margin.push(Value::Real(m.profit_margin));
    stock_turnover.push(Value::Real(m.stock_turnover));
    sales_to_purchase.push(Value::Real(m.sales_to_purchase_ratio));
  }

  batch.push_column("GrossProfit", gross_profit)?;
  batch.push_column("ProfitMargin", profit_margin)?;
  batch.push_column("StockTurnover", stock_turnover)?;
  batch.push_column("SalesToPurchaseRatio", sales_to_purchase)?;

  Ok(batch)
}

fn coerce_volume(value: &Value) -> Result<Value> {
  match value {
    Value::Real(r) => Ok(Value::Real(*r)),
    Value::Integer(i) => Ok(Value::Real(*i as f64)),
    Value::Text(s) => s
      .trim()
      .parse::<f64>()
      .map(Value::Real)
      .map_err(|_| Error::VolumeNotNumeric(s.clone())),
    // Filled with zero by the null pass just after.
    Value::Null => Ok(Value::Null),
  }
}

/// Aggregate columns are numeric after the null fill; anything else
/// counts as zero.
fn numeric(value: &Value) -> f64 {
  value.as_f64().unwrap_or(0.0)
}

//! Summary builder: the multi-grain vendor aggregation and its cleaning
//! stage.
//!
//! Stage A runs one fixed SQL statement against the tables the loader
//! populated; Stage B is a pure transform over the result. The cleaned
//! batch replaces the `vendor_sales_summary` table.

mod clean;
mod query;

pub mod error;

pub use clean::clean;
pub use error::{Error, Result};
pub use query::{
  PURCHASE_PRICES_TABLE, PURCHASES_TABLE, SALES_TABLE, SUMMARY_TABLE,
  VENDOR_INVOICE_TABLE, VENDOR_SUMMARY_SQL,
};

use vintry_core::{batch::Batch, report::Reporter, store::TableStore};

/// Build, clean and persist the vendor sales summary.
///
/// Any failure aborts the build; nothing is written unless the query and
/// the cleaning stage both succeed.
pub async fn build_summary<S, R>(store: &S, reporter: &R) -> Result<Batch>
where
  S: TableStore,
  R: Reporter,
{
  reporter.info("building vendor sales summary");
  let raw = store
    .query(VENDOR_SUMMARY_SQL)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  reporter.info(&format!("aggregation returned {} rows", raw.len()));

  let cleaned = clean(raw)?;

  store
    .replace(SUMMARY_TABLE, &cleaned)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  reporter.info(&format!(
    "wrote {} rows to {SUMMARY_TABLE}",
    cleaned.len()
  ));

  Ok(cleaned)
}

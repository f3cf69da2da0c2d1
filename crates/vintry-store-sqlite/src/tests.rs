//! Behavioral tests for `SqliteStore` against an in-memory database.

use vintry_core::{batch::Batch, store::TableStore, value::Value};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn inventory_batch(rows: &[(i64, &str, f64)]) -> Batch {
  Batch::from_rows(
    vec!["Brand".into(), "Description".into(), "Price".into()],
    rows
      .iter()
      .map(|(brand, desc, price)| {
        vec![
          Value::Integer(*brand),
          Value::Text((*desc).to_owned()),
          Value::Real(*price),
        ]
      })
      .collect(),
  )
  .unwrap()
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_creates_table_with_rows() {
  let s = store().await;
  let batch = inventory_batch(&[(10, "Cabernet", 12.99), (11, "Merlot", 9.5)]);

  s.replace("purchase_prices", &batch).await.unwrap();

  let result = s
    .query("SELECT Brand, Description, Price FROM purchase_prices ORDER BY Brand")
    .await
    .unwrap();
  assert_eq!(result.len(), 2);
  assert_eq!(result.rows()[0][0], Value::Integer(10));
  assert_eq!(result.rows()[0][1], Value::Text("Cabernet".into()));
  assert_eq!(result.rows()[1][2], Value::Real(9.5));
}

#[tokio::test]
async fn replace_drops_previous_contents() {
  let s = store().await;

  s.replace("t", &inventory_batch(&[(1, "a", 1.0), (2, "b", 2.0)]))
    .await
    .unwrap();
  s.replace("t", &inventory_batch(&[(3, "c", 3.0)]))
    .await
    .unwrap();

  let result = s.query("SELECT Brand FROM t").await.unwrap();
  assert_eq!(result.len(), 1);
  assert_eq!(result.rows()[0][0], Value::Integer(3));
}

#[tokio::test]
async fn replace_may_change_the_schema() {
  let s = store().await;

  s.replace("t", &inventory_batch(&[(1, "a", 1.0)]))
    .await
    .unwrap();

  let narrower = Batch::from_rows(vec!["VendorNumber".into()], vec![vec![
    Value::Integer(7),
  ]])
  .unwrap();
  s.replace("t", &narrower).await.unwrap();

  let result = s.query("SELECT * FROM t").await.unwrap();
  assert_eq!(result.columns(), ["VendorNumber"]);
  assert_eq!(result.rows()[0][0], Value::Integer(7));
}

#[tokio::test]
async fn replace_with_no_columns_errors() {
  let s = store().await;
  let err = s.replace("t", &Batch::new(vec![])).await.unwrap_err();
  assert!(matches!(err, crate::Error::EmptySchema(_)));
}

#[tokio::test]
async fn replace_with_zero_rows_creates_an_empty_table() {
  let s = store().await;

  s.replace("t", &Batch::new(vec!["a".into(), "b".into()]))
    .await
    .unwrap();

  let result = s.query("SELECT * FROM t").await.unwrap();
  assert!(result.is_empty());
  assert_eq!(result.columns(), ["a", "b"]);
}

// ─── Append ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn append_adds_rows_without_touching_existing_ones() {
  let s = store().await;

  s.replace("t", &inventory_batch(&[(1, "a", 1.0)]))
    .await
    .unwrap();
  s.append("t", &inventory_batch(&[(2, "b", 2.0), (3, "c", 3.0)]))
    .await
    .unwrap();

  let result = s
    .query("SELECT Brand FROM t ORDER BY Brand")
    .await
    .unwrap();
  assert_eq!(result.len(), 3);
  assert_eq!(result.rows()[0][0], Value::Integer(1));
  assert_eq!(result.rows()[2][0], Value::Integer(3));
}

#[tokio::test]
async fn append_to_missing_table_errors() {
  let s = store().await;
  let err = s
    .append("nowhere", &inventory_batch(&[(1, "a", 1.0)]))
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)));
}

// ─── Query ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn query_missing_table_errors() {
  let s = store().await;
  let err = s.query("SELECT * FROM nowhere").await.unwrap_err();
  assert!(matches!(err, crate::Error::Database(_)));
}

#[tokio::test]
async fn nulls_round_trip() {
  let s = store().await;
  let batch = Batch::from_rows(
    vec!["VendorNumber".into(), "Freight".into()],
    vec![
      vec![Value::Integer(1), Value::Null],
      vec![Value::Integer(2), Value::Real(4.25)],
    ],
  )
  .unwrap();

  s.replace("vendor_invoice", &batch).await.unwrap();

  let result = s
    .query("SELECT Freight FROM vendor_invoice ORDER BY VendorNumber")
    .await
    .unwrap();
  assert_eq!(result.rows()[0][0], Value::Null);
  assert_eq!(result.rows()[1][0], Value::Real(4.25));
}

#[tokio::test]
async fn aggregates_come_back_typed() {
  let s = store().await;
  let batch = Batch::from_rows(
    vec!["VendorNo".into(), "SalesDollars".into()],
    vec![
      vec![Value::Integer(1), Value::Real(10.5)],
      vec![Value::Integer(1), Value::Real(4.5)],
    ],
  )
  .unwrap();
  s.replace("sales", &batch).await.unwrap();

  let result = s
    .query("SELECT VendorNo, SUM(SalesDollars) FROM sales GROUP BY VendorNo")
    .await
    .unwrap();
  assert_eq!(result.rows()[0][1], Value::Real(15.0));
}

// ─── Schema inference ────────────────────────────────────────────────────────

#[tokio::test]
async fn mixed_numeric_column_gets_real_affinity() {
  let s = store().await;
  let batch = Batch::from_rows(vec!["v".into()], vec![
    vec![Value::Integer(1)],
    vec![Value::Real(2.5)],
  ])
  .unwrap();
  s.replace("t", &batch).await.unwrap();

  // REAL affinity converts the integer on storage.
  let result = s.query("SELECT v FROM t ORDER BY v").await.unwrap();
  assert_eq!(result.rows()[0][0], Value::Real(1.0));
  assert_eq!(result.rows()[1][0], Value::Real(2.5));
}

#[tokio::test]
async fn quoted_identifiers_survive_awkward_names() {
  let s = store().await;
  let batch = Batch::from_rows(vec!["Total Sales".into()], vec![vec![
    Value::Integer(5),
  ]])
  .unwrap();

  s.replace("vendor summary", &batch).await.unwrap();

  let result = s
    .query("SELECT \"Total Sales\" FROM \"vendor summary\"")
    .await
    .unwrap();
  assert_eq!(result.rows()[0][0], Value::Integer(5));
}

//! [`SqliteStore`] — the SQLite implementation of [`TableStore`].

use std::path::Path;

use vintry_core::{batch::Batch, store::TableStore};

use crate::{
  Error, Result,
  encode::{column_affinity, decode_value, encode_value, quote_ident},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A table store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_pragmas().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_pragmas().await?;
    Ok(store)
  }

  async fn init_pragmas(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert every batch row with one prepared statement inside `tx`.
  fn insert_rows(
    tx: &rusqlite::Transaction<'_>,
    sql: &str,
    rows: &[Vec<rusqlite::types::Value>],
  ) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare(sql)?;
    for row in rows {
      stmt.execute(rusqlite::params_from_iter(row.iter()))?;
    }
    Ok(())
  }
}

// ─── SQL generation ──────────────────────────────────────────────────────────

fn create_table_sql(table: &str, batch: &Batch) -> Result<String> {
  if batch.width() == 0 {
    return Err(Error::EmptySchema(table.to_owned()));
  }
  let columns = batch
    .columns()
    .iter()
    .enumerate()
    .map(|(i, name)| {
      format!("{} {}", quote_ident(name), column_affinity(batch, i))
    })
    .collect::<Vec<_>>()
    .join(", ");
  Ok(format!("CREATE TABLE {} ({columns})", quote_ident(table)))
}

fn insert_sql(table: &str, batch: &Batch) -> String {
  let columns = batch
    .columns()
    .iter()
    .map(|name| quote_ident(name))
    .collect::<Vec<_>>()
    .join(", ");
  let params = (1..=batch.width())
    .map(|i| format!("?{i}"))
    .collect::<Vec<_>>()
    .join(", ");
  format!("INSERT INTO {} ({columns}) VALUES ({params})", quote_ident(table))
}

fn encode_rows(batch: &Batch) -> Vec<Vec<rusqlite::types::Value>> {
  batch
    .rows()
    .iter()
    .map(|row| row.iter().map(encode_value).collect())
    .collect()
}

// ─── TableStore impl ─────────────────────────────────────────────────────────

impl TableStore for SqliteStore {
  type Error = Error;

  async fn replace(&self, table: &str, batch: &Batch) -> Result<()> {
    let drop_sql = format!("DROP TABLE IF EXISTS {}", quote_ident(table));
    let create = create_table_sql(table, batch)?;
    let insert = insert_sql(table, batch);
    let rows = encode_rows(batch);

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(&drop_sql, [])?;
        tx.execute(&create, [])?;
        Self::insert_rows(&tx, &insert, &rows)?;
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn append(&self, table: &str, batch: &Batch) -> Result<()> {
    let insert = insert_sql(table, batch);
    let rows = encode_rows(batch);

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        Self::insert_rows(&tx, &insert, &rows)?;
        tx.commit()?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn query(&self, sql: &str) -> Result<Batch> {
    let sql = sql.to_owned();

    let (columns, raw_rows): (Vec<String>, Vec<Vec<rusqlite::types::Value>>) =
      self
        .conn
        .call(move |conn| {
          let mut stmt = conn.prepare(&sql)?;
          let columns: Vec<String> =
            stmt.column_names().iter().map(|c| c.to_string()).collect();
          let width = columns.len();

          let mut raw_rows = Vec::new();
          let mut rows = stmt.query([])?;
          while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(width);
            for i in 0..width {
              cells.push(row.get::<_, rusqlite::types::Value>(i)?);
            }
            raw_rows.push(cells);
          }

          Ok((columns, raw_rows))
        })
        .await?;

    let mut decoded = Vec::with_capacity(raw_rows.len());
    for raw in raw_rows {
      decoded.push(
        raw
          .into_iter()
          .map(decode_value)
          .collect::<Result<Vec<_>>>()?,
      );
    }

    Ok(Batch::from_rows(columns, decoded)?)
  }
}

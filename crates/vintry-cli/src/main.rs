//! `vintry` binary — runs the CSV loader and the summary builder against a
//! single SQLite inventory database.
//!
//! Reads `vintry.toml` (or the path given with `--config`); every key can
//! also be set through the environment with a `VINTRY_` prefix, e.g.
//! `VINTRY_DATA_DIR=exports vintry run`.

use std::{
  fs,
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
  EnvFilter, Layer as _, layer::SubscriberExt as _,
  util::SubscriberInitExt as _,
};
use vintry_core::report::TracingReporter;
use vintry_ingest::{IngestOptions, ingest_dir};
use vintry_store_sqlite::SqliteStore;
use vintry_summary::build_summary;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `vintry.toml`.
#[derive(Debug, Clone, Deserialize)]
struct PipelineConfig {
  /// SQLite database file.
  #[serde(default = "default_db_path")]
  db_path:    PathBuf,
  /// Directory scanned for source files.
  #[serde(default = "default_data_dir")]
  data_dir:   PathBuf,
  /// Directory the run log is appended to.
  #[serde(default = "default_log_dir")]
  log_dir:    PathBuf,
  /// Loader batch size in rows.
  #[serde(default = "default_batch_size")]
  batch_size: usize,
}

fn default_db_path() -> PathBuf {
  PathBuf::from("inventory.db")
}

fn default_data_dir() -> PathBuf {
  PathBuf::from("data")
}

fn default_log_dir() -> PathBuf {
  PathBuf::from("logs")
}

fn default_batch_size() -> usize {
  vintry_ingest::DEFAULT_BATCH_SIZE
}

// ─── CLI ─────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Vendor sales summary pipeline")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "vintry.toml")]
  config: PathBuf,

  /// Print the ingest report as JSON on stdout.
  #[arg(long)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Load every CSV in the data directory into the database.
  Ingest,
  /// Build the vendor sales summary from already-loaded tables.
  Summary,
  /// Ingest, then build the summary.
  Run,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("VINTRY"))
    .build()
    .context("failed to read configuration")?;

  let pipeline: PipelineConfig = settings
    .try_deserialize()
    .context("failed to deserialise configuration")?;

  init_tracing(&pipeline.log_dir)?;
  tracing::debug!("configuration: {pipeline:?}");

  let store = SqliteStore::open(&pipeline.db_path)
    .await
    .with_context(|| {
      format!("failed to open database at {}", pipeline.db_path.display())
    })?;
  let reporter = TracingReporter;

  match cli.command {
    Command::Ingest => {
      run_ingest(&store, &reporter, &pipeline, cli.json).await?;
    }
    Command::Summary => {
      build_summary(&store, &reporter).await?;
    }
    Command::Run => {
      run_ingest(&store, &reporter, &pipeline, cli.json).await?;
      build_summary(&store, &reporter).await?;
    }
  }

  Ok(())
}

async fn run_ingest(
  store: &SqliteStore,
  reporter: &TracingReporter,
  pipeline: &PipelineConfig,
  json: bool,
) -> anyhow::Result<()> {
  let options = IngestOptions { batch_size: pipeline.batch_size };
  let report =
    ingest_dir(store, reporter, &pipeline.data_dir, &options).await;

  if json {
    println!("{}", serde_json::to_string_pretty(&report)?);
  }
  Ok(())
}

/// Console output at INFO (overridable via `RUST_LOG`) plus a DEBUG layer
/// appending to `vintry.log` under `log_dir`.
fn init_tracing(log_dir: &Path) -> anyhow::Result<()> {
  fs::create_dir_all(log_dir).with_context(|| {
    format!("failed to create log directory {}", log_dir.display())
  })?;
  let file = fs::OpenOptions::new()
    .append(true)
    .create(true)
    .open(log_dir.join("vintry.log"))
    .context("failed to open log file")?;

  let console = tracing_subscriber::fmt::layer().with_filter(
    EnvFilter::builder()
      .with_default_directive(LevelFilter::INFO.into())
      .from_env_lossy(),
  );
  let file_layer = tracing_subscriber::fmt::layer()
    .with_ansi(false)
    .with_writer(Arc::new(file))
    .with_filter(LevelFilter::DEBUG);

  tracing_subscriber::registry()
    .with(console)
    .with(file_layer)
    .init();
  Ok(())
}

//! Core types and trait definitions for the Vintry ingestion pipeline.
//!
//! This crate is deliberately free of database and filesystem dependencies.
//! All other crates depend on it; it depends on nothing heavier than
//! `tracing`.

pub mod batch;
pub mod error;
pub mod metrics;
pub mod naming;
pub mod report;
pub mod store;
pub mod value;

pub use error::{Error, Result};

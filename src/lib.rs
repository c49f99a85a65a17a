//! Empirical discrete distributions from columnar text data
//!
//! This crate re-exports the workspace members: record extraction and null
//! filtering (`ingest`), histogram construction and normalization
//! (`histogram`), and the shared error taxonomy.

pub use empirical_core::{Error, Result};
pub use empirical_histogram as histogram;
pub use empirical_ingest as ingest;

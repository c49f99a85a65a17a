//! Histogram construction and normalization for empirical discrete
//! distributions
//!
//! This crate is the core of the distribution pipelines: it assigns buffered
//! raw values to bins, accumulates counts, and normalizes the completed bin
//! table into probability-mass or complementary-cumulative form.
//!
//! # Key Features
//!
//! - **Three binning strategies**: fixed-width linear bins over an explicit
//!   range, one bin per distinct observed value, and logarithmically spaced
//!   bins covering an auto-detected range
//! - **Bounded bin search**: locating a value among the bin edges returns a
//!   tagged result instead of scanning past the edge table
//! - **Explicit empty-distribution handling**: normalizing zero surviving
//!   values is an error, never a row of NaNs
//!
//! # Examples
//!
//! ```rust
//! use empirical_histogram::{DistributionOps, FixedRangeBuilder, HistogramBuilder};
//!
//! let data = vec![1.5, 2.5, 0.5];
//! let builder = FixedRangeBuilder::new(0.0, 3.0, 3).unwrap();
//! let histogram = builder.build(&data).unwrap();
//!
//! assert_eq!(histogram.counts(), vec![1, 1, 1]);
//! assert_eq!(histogram.centers(), vec![0.5, 1.5, 2.5]);
//!
//! let pmf = histogram.pmf().unwrap();
//! assert!((pmf.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! ```

pub mod builders;
pub mod ops;
pub mod render;
pub mod search;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{FixedRangeBuilder, LogarithmicBuilder, UniqueValueBuilder};
pub use ops::DistributionOps;
pub use render::{write_table, BinLabel, DEFAULT_PRECISION};
pub use search::{locate, locate_last_inclusive, BinLocation};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use empirical_core::Result;

// Convenience functions
/// Build a histogram with fixed-width linear bins over `[lower, upper)`
pub fn linear_histogram(
    data: &[f64],
    lower: f64,
    upper: f64,
    num_bins: usize,
) -> Result<Histogram> {
    FixedRangeBuilder::new(lower, upper, num_bins)?.build(data)
}

/// Build a histogram with one bin per distinct observed value
pub fn unique_histogram(data: &[f64], integer_keys: bool) -> Result<Histogram> {
    UniqueValueBuilder::new(integer_keys).build(data)
}

/// Build a logarithmically binned histogram over an auto-detected range
pub fn log_histogram(data: &[f64]) -> Result<Histogram> {
    LogarithmicBuilder::new().build(data)
}

//! Record selection and null filtering for distribution pipelines
//!
//! Raw values come from a whitespace-delimited, line-oriented text source:
//! either one value per line at a fixed column, or every value on one fixed
//! row. The whole sequence is buffered in memory so that two-phase binners
//! never have to re-read the source.
//!
//! # Examples
//!
//! ```rust
//! use empirical_ingest::{extract, NullFilter, Selector};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("0 1.5\n0 2.5\n0 0.5\n");
//! let values = extract(input, Selector::Column(1)).unwrap();
//! assert_eq!(values, vec![1.5, 2.5, 0.5]);
//!
//! let filter = NullFilter::new(true, 1e-10);
//! assert_eq!(filter.retain(vec![0.0, 2.0]), vec![2.0]);
//! ```

pub mod filter;
pub mod selector;

pub use filter::NullFilter;
pub use selector::{extract, Selector};

pub use empirical_core::Result;

//! Argument structs shared by every distribution tool

use std::path::PathBuf;

use clap::Args;

use empirical_histogram::DEFAULT_PRECISION;
use empirical_ingest::{NullFilter, Selector};

/// Input selection options
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Path to the whitespace-delimited input file
    #[arg(short, long)]
    pub input_path: PathBuf,

    /// Column index of the raw data (starting from column 0)
    #[arg(short, long, default_value_t = 0)]
    pub column_idx: usize,

    /// Row index of the raw data (starting from row 0); overrides column mode
    #[arg(short, long)]
    pub row_idx: Option<usize>,

    /// Precision of the output
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,
}

impl InputArgs {
    /// Row mode takes precedence when both selectors are present
    pub fn selector(&self) -> Selector {
        match self.row_idx {
            Some(row_idx) => Selector::Row(row_idx),
            None => Selector::Column(self.column_idx),
        }
    }
}

/// Null-entry filtering options
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Ignore null entries (with the given tolerance)
    #[arg(long, default_value_t = false)]
    pub ignore_null: bool,

    /// Tolerance on null entries
    #[arg(short, long, default_value_t = NullFilter::DEFAULT_TOLERANCE)]
    pub tolerance: f64,
}

impl FilterArgs {
    pub fn filter(&self) -> NullFilter {
        NullFilter::new(self.ignore_null, self.tolerance)
    }
}

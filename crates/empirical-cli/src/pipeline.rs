//! End-to-end pipelines shared by the command-line tools
//!
//! Each pipeline has the same shape: extract the selected values, drop
//! nulls, bin, normalize, and write the table. Everything is generic over
//! the reader and writer so the binaries pass a file and stdout while the
//! tests pass in-memory buffers.

use std::io::{BufRead, Write};

use tracing::info;

use empirical_core::{Error, Result};
use empirical_histogram::{
    write_table, BinLabel, DistributionOps, FixedRangeBuilder, HistogramBuilder,
    LogarithmicBuilder, UniqueValueBuilder,
};
use empirical_ingest::{extract, NullFilter, Selector};

/// Configuration for the fixed-range linear pipeline
#[derive(Debug, Clone)]
pub struct BinnedConfig {
    pub selector: Selector,
    pub filter: NullFilter,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub number_of_bins: usize,
    pub precision: usize,
}

/// Configuration for the unique-value pipeline
#[derive(Debug, Clone)]
pub struct DiscreteConfig {
    pub selector: Selector,
    pub filter: NullFilter,
    pub are_int: bool,
    pub precision: usize,
}

/// Output form of the power-law pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerLawMode {
    /// Plain empirical PMF over unique values
    Pmf,
    /// Un-binned empirical CCDF
    Ccdf,
    /// Logarithmically binned histogram
    LogarithmicBins,
}

/// Configuration for the power-law pipeline
#[derive(Debug, Clone)]
pub struct PowerLawConfig {
    pub selector: Selector,
    pub filter: NullFilter,
    pub mode: PowerLawMode,
    pub precision: usize,
}

/// Fixed-width linear bins over an explicit range, PMF output
pub fn run_binned<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &BinnedConfig,
) -> Result<()> {
    let builder =
        FixedRangeBuilder::new(config.lower_bound, config.upper_bound, config.number_of_bins)?;
    let values = filtered_values(reader, config.selector, config.filter)?;
    let histogram = builder.build(&values)?;
    let pmf = histogram.pmf()?;
    write_table(writer, &histogram, &pmf, BinLabel::Center, config.precision)?;
    Ok(())
}

/// One bin per distinct observed value, PMF output
pub fn run_discrete<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &DiscreteConfig,
) -> Result<()> {
    info!("computing the empirical distribution");
    let values = filtered_values(reader, config.selector, config.filter)?;
    let histogram = UniqueValueBuilder::new(config.are_int).build(&values)?;
    let pmf = histogram.pmf()?;
    let label = if config.are_int {
        BinLabel::Integer
    } else {
        BinLabel::Center
    };
    write_table(writer, &histogram, &pmf, label, config.precision)?;
    Ok(())
}

/// Unique-value PMF/CCDF or logarithmically binned PMF over count data
pub fn run_power_law<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    config: &PowerLawConfig,
) -> Result<()> {
    let values = filtered_values(reader, config.selector, config.filter)?;
    match config.mode {
        PowerLawMode::LogarithmicBins => {
            info!("logarithmically binned mode selected");
            let histogram = LogarithmicBuilder::new().build(&values)?;
            let pmf = histogram.pmf()?;
            write_table(writer, &histogram, &pmf, BinLabel::Bounds, config.precision)?;
        }
        PowerLawMode::Ccdf => {
            info!("CCDF mode selected");
            let histogram = UniqueValueBuilder::new(true).build(&values)?;
            let ccdf = histogram.ccdf()?;
            write_table(writer, &histogram, &ccdf, BinLabel::Integer, config.precision)?;
        }
        PowerLawMode::Pmf => {
            info!("normal mode selected");
            let histogram = UniqueValueBuilder::new(true).build(&values)?;
            let pmf = histogram.pmf()?;
            write_table(writer, &histogram, &pmf, BinLabel::Integer, config.precision)?;
        }
    }
    Ok(())
}

fn filtered_values<R: BufRead>(
    reader: R,
    selector: Selector,
    filter: NullFilter,
) -> Result<Vec<f64>> {
    let values = extract(reader, selector)?;
    let values = filter.retain(values);
    if values.is_empty() {
        return Err(Error::EmptyDistribution);
    }
    tracing::debug!(surviving = values.len(), "values ready for binning");
    Ok(values)
}

//! Core trait for histogram building

use crate::types::Histogram;
use empirical_core::Result;

/// Trait for building histograms from buffered sample data
///
/// Builders that need a full pre-scan of the sample (unique-value and
/// logarithmic binning) do both phases inside `build`; the sample is
/// already in memory, so nothing re-reads the original source.
pub trait HistogramBuilder {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[f64]) -> Result<Histogram>;

    /// Get the target number of bins, when known before seeing data
    fn target_bins(&self) -> Option<usize> {
        None
    }
}

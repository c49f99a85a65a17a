//! Binning strategies for empirical distributions
//!
//! Three interchangeable strategies behind the [`HistogramBuilder`] trait:
//! fixed-width linear bins over an explicit range, one bin per distinct
//! observed value, and logarithmically spaced bins covering an auto-detected
//! range. The unique-value and logarithmic strategies need the full sample
//! before bins exist, so they run a collection phase over the buffered
//! values first and accumulate second.

use std::collections::BTreeMap;

use ordered_float::NotNan;

use crate::search::{locate, locate_last_inclusive, BinLocation};
use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use empirical_core::{Error, Result};

/// Fixed-width linear bins over an explicit `[lower, upper)` range
///
/// Values outside the range are hard errors; the accumulation never wraps
/// to an invalid index.
pub struct FixedRangeBuilder {
    lower: f64,
    upper: f64,
    num_bins: usize,
}

impl FixedRangeBuilder {
    /// Create a new fixed-range builder
    pub fn new(lower: f64, upper: f64, num_bins: usize) -> Result<Self> {
        if !upper.is_finite() || !lower.is_finite() || upper <= lower {
            return Err(Error::config(format!(
                "upper bound {upper} must be greater than lower bound {lower}"
            )));
        }
        if num_bins == 0 {
            return Err(Error::config("number of bins must be at least 1"));
        }
        Ok(Self {
            lower,
            upper,
            num_bins,
        })
    }

    fn edges(&self) -> Vec<f64> {
        (0..=self.num_bins)
            .map(|i| {
                self.lower + (i as f64 / self.num_bins as f64) * (self.upper - self.lower)
            })
            .collect()
    }
}

impl HistogramBuilder for FixedRangeBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let edges = self.edges();
        let mut counts = vec![0u64; self.num_bins];
        for &value in sample {
            match locate(&edges, value) {
                BinLocation::Found(idx) => counts[idx] += 1,
                BinLocation::BelowRange => {
                    return Err(Error::ValueBelowRange {
                        value,
                        lower: self.lower,
                    })
                }
                BinLocation::AboveRange => {
                    return Err(Error::ValueAboveRange {
                        value,
                        upper: self.upper,
                    })
                }
            }
        }

        let bins = edges
            .windows(2)
            .zip(counts)
            .map(|(edge, count)| HistogramBin::new(edge[0], edge[1], count))
            .collect();
        Ok(Histogram::new(bins))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// One bin per distinct observed value
///
/// Accumulation matches keys exactly rather than searching intervals, so the
/// `key ± 0.1` bin edges are presentation only (they assume integer-spaced
/// data). In integer mode keys are truncated toward zero before matching.
pub struct UniqueValueBuilder {
    integer_keys: bool,
}

impl UniqueValueBuilder {
    /// Create a new unique-value builder
    pub fn new(integer_keys: bool) -> Self {
        Self { integer_keys }
    }

    fn key(&self, value: f64) -> f64 {
        if self.integer_keys {
            value.trunc()
        } else {
            value
        }
    }
}

impl HistogramBuilder for UniqueValueBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let mut counts: BTreeMap<NotNan<f64>, u64> = BTreeMap::new();
        for &value in sample {
            let key = NotNan::new(self.key(value))
                .map_err(|_| Error::config("input contains NaN values"))?;
            *counts.entry(key).or_insert(0) += 1;
        }

        let bins = counts
            .into_iter()
            .map(|(key, count)| {
                let key = key.into_inner();
                HistogramBin::new(key - 0.1, key + 0.1, count)
            })
            .collect();
        Ok(Histogram::new(bins))
    }
}

/// Logarithmically spaced bins: powers of ten subdivided decade-wise
///
/// Edges sit at `10^(exponent + subdivision/10)` for every exponent below
/// `max_exponent = ceil(log10(max))`, and the final edge closes the table
/// at exactly `10^max_exponent`, replacing the last subdivision; the last
/// bin is therefore the wide `[10^(E-1+0.8), 10^E]` one. The table always
/// starts at `10^0 = 1`, so every value must lie in `[1, 10^max_exponent]`.
pub struct LogarithmicBuilder;

impl LogarithmicBuilder {
    /// Create a new logarithmic builder
    pub fn new() -> Self {
        Self
    }

    fn edges(max_exponent: u32) -> Vec<f64> {
        let number_of_bins = 10 * max_exponent as usize - 1;
        let mut edges = Vec::with_capacity(number_of_bins + 1);
        for exponent in 0..max_exponent {
            for subdivision in 0..10u32 {
                edges.push(10f64.powf(exponent as f64 + subdivision as f64 / 10.0));
            }
        }
        edges.truncate(number_of_bins);
        edges.push(10f64.powi(max_exponent as i32));
        edges
    }
}

impl Default for LogarithmicBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HistogramBuilder for LogarithmicBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        if sample.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !(max > 0.0) {
            return Err(Error::InvalidLogDomain { max });
        }

        // max == 1 would give an empty edge table; clamp to one full decade
        let max_exponent = (max.log10().ceil() as i64).max(1) as u32;
        let edges = Self::edges(max_exponent);
        tracing::debug!(
            max,
            max_exponent,
            number_of_bins = edges.len() - 1,
            "constructed logarithmic bins"
        );

        let mut counts = vec![0u64; edges.len() - 1];
        for &value in sample {
            match locate_last_inclusive(&edges, value) {
                BinLocation::Found(idx) => counts[idx] += 1,
                BinLocation::BelowRange => {
                    return Err(Error::ValueBelowRange {
                        value,
                        lower: edges[0],
                    })
                }
                BinLocation::AboveRange => {
                    return Err(Error::ValueAboveRange {
                        value,
                        upper: edges[edges.len() - 1],
                    })
                }
            }
        }

        let bins = edges
            .windows(2)
            .zip(counts)
            .map(|(edge, count)| HistogramBin::new(edge[0], edge[1], count))
            .collect();
        Ok(Histogram::new(bins))
    }
}

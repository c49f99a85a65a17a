//! Normalization of completed bin tables

use crate::types::Histogram;
use empirical_core::{Error, Result};

/// Probability views over a completed histogram
pub trait DistributionOps {
    /// Per-bin probability mass: `count / total`
    fn pmf(&self) -> Result<Vec<f64>>;

    /// Complementary cumulative distribution: `1 - Σ pmf` up to and
    /// including each bin
    fn ccdf(&self) -> Result<Vec<f64>>;
}

impl DistributionOps for Histogram {
    fn pmf(&self) -> Result<Vec<f64>> {
        if self.total_count() == 0 {
            return Err(Error::EmptyDistribution);
        }
        let total = self.total_count() as f64;
        Ok(self
            .bins()
            .iter()
            .map(|bin| bin.count as f64 / total)
            .collect())
    }

    fn ccdf(&self) -> Result<Vec<f64>> {
        let pmf = self.pmf()?;
        let mut remaining = 1.0;
        Ok(pmf
            .iter()
            .map(|mass| {
                remaining -= mass;
                remaining
            })
            .collect())
    }
}

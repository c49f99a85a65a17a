//! Tolerance-based null filtering

/// Drops values whose magnitude is at or below a tolerance.
///
/// A value survives when `!ignore_null || value.abs() > tolerance`; the
/// comparison is strict, so a value exactly at the tolerance is treated as
/// null when filtering is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullFilter {
    ignore_null: bool,
    tolerance: f64,
}

impl NullFilter {
    /// Default tolerance on null entries
    pub const DEFAULT_TOLERANCE: f64 = 1e-10;

    pub fn new(ignore_null: bool, tolerance: f64) -> Self {
        Self {
            ignore_null,
            tolerance,
        }
    }

    /// A disabled filter that keeps every value
    pub fn keep_all() -> Self {
        Self::new(false, Self::DEFAULT_TOLERANCE)
    }

    pub fn keep(&self, value: f64) -> bool {
        !self.ignore_null || value.abs() > self.tolerance
    }

    /// Drop filtered-out values, preserving input order
    pub fn retain(&self, values: Vec<f64>) -> Vec<f64> {
        if !self.ignore_null {
            return values;
        }
        values.into_iter().filter(|v| self.keep(*v)).collect()
    }
}

impl Default for NullFilter {
    fn default() -> Self {
        Self::keep_all()
    }
}

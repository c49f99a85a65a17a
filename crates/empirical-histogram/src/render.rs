//! Fixed-precision table output
//!
//! One line per bin, ascending, tab-separated: the bin's representative
//! value(s) followed by its normalized value. Diagnostics belong on a
//! separate stream; this module only ever writes data rows.

use std::io::{self, Write};

use crate::types::Histogram;

/// Default number of decimal digits in the output
pub const DEFAULT_PRECISION: usize = 8;

/// How the representative value column(s) of each row are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinLabel {
    /// Bin midpoint at the configured precision (linear bins, float keys)
    Center,
    /// Midpoint rounded to the nearest integer (integer-valued unique bins)
    Integer,
    /// Lower and upper bin edges as two columns (logarithmic bins)
    Bounds,
}

/// Write one row per bin: representative value(s), a tab, and the
/// normalized value.
///
/// `values` holds the normalized value per bin, in bin order.
pub fn write_table<W: Write>(
    writer: &mut W,
    histogram: &Histogram,
    values: &[f64],
    label: BinLabel,
    precision: usize,
) -> io::Result<()> {
    debug_assert_eq!(histogram.len(), values.len());
    for (bin, value) in histogram.bins().iter().zip(values) {
        match label {
            BinLabel::Center => writeln!(
                writer,
                "{:.p$}\t{:.p$}",
                bin.center(),
                value,
                p = precision
            )?,
            BinLabel::Integer => writeln!(
                writer,
                "{}\t{:.p$}",
                bin.center().round() as i64,
                value,
                p = precision
            )?,
            BinLabel::Bounds => writeln!(
                writer,
                "{:.p$}\t{:.p$}\t{:.p$}",
                bin.left,
                bin.right,
                value,
                p = precision
            )?,
        }
    }
    Ok(())
}

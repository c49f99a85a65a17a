//! Column and row selection over line-oriented numeric text

use std::io::BufRead;

use empirical_core::{Error, Result};

/// Which slice of the input supplies the raw values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// One value per line, taken from this 0-based column
    Column(usize),
    /// Every whitespace-separated value on this 0-based line
    Row(usize),
}

/// Read all selected values into memory.
///
/// Lines with too few fields and tokens that do not parse as numbers are
/// hard errors naming the 1-based offending line. Extra fields on a line
/// are tolerated in column mode.
pub fn extract<R: BufRead>(reader: R, selector: Selector) -> Result<Vec<f64>> {
    match selector {
        Selector::Column(column_idx) => extract_column(reader, column_idx),
        Selector::Row(row_idx) => extract_row(reader, row_idx),
    }
}

fn extract_column<R: BufRead>(reader: R, column_idx: usize) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let token = match line.split_whitespace().nth(column_idx) {
            Some(token) => token,
            None => {
                return Err(Error::malformed_record(
                    line_no,
                    column_idx + 1,
                    line.split_whitespace().count(),
                ))
            }
        };
        values.push(parse_token(token, line_no)?);
    }
    tracing::debug!(column = column_idx, count = values.len(), "extracted column");
    Ok(values)
}

fn extract_row<R: BufRead>(reader: R, row_idx: usize) -> Result<Vec<f64>> {
    let mut lines = reader.lines();
    let mut available = 0usize;
    for _ in 0..row_idx {
        match lines.next() {
            Some(line) => {
                line?;
                available += 1;
            }
            None => {
                return Err(Error::RowIndexOutOfRange {
                    requested: row_idx,
                    available,
                })
            }
        }
    }
    let line = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(Error::RowIndexOutOfRange {
                requested: row_idx,
                available,
            })
        }
    };

    let line_no = row_idx + 1;
    let values = line
        .split_whitespace()
        .map(|token| parse_token(token, line_no))
        .collect::<Result<Vec<f64>>>()?;
    tracing::debug!(row = row_idx, count = values.len(), "extracted row");
    Ok(values)
}

fn parse_token(token: &str, line_no: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| Error::invalid_number(line_no, token))
}

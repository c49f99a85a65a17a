//! End-to-end pipeline tests over in-memory readers and writers

use std::io::Cursor;

use approx::assert_relative_eq;

use empirical_cli::pipeline::{
    run_binned, run_discrete, run_power_law, BinnedConfig, DiscreteConfig, PowerLawConfig,
    PowerLawMode,
};
use empirical_core::Error;
use empirical_ingest::{NullFilter, Selector};

fn binned_config() -> BinnedConfig {
    BinnedConfig {
        selector: Selector::Column(1),
        filter: NullFilter::keep_all(),
        lower_bound: 0.0,
        upper_bound: 3.0,
        number_of_bins: 3,
        precision: 8,
    }
}

fn run_binned_on(input: &str, config: &BinnedConfig) -> Result<String, Error> {
    let mut out = Vec::new();
    run_binned(Cursor::new(input), &mut out, config)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_binned_three_even_bins() {
    let output = run_binned_on("0 1.5\n0 2.5\n0 0.5\n", &binned_config()).unwrap();
    assert_eq!(
        output,
        "0.50000000\t0.33333333\n\
         1.50000000\t0.33333333\n\
         2.50000000\t0.33333333\n"
    );
}

#[test]
fn test_binned_is_idempotent() {
    let input = "0 1.5\n0 2.5\n0 0.5\n0 0.25\n";
    let first = run_binned_on(input, &binned_config()).unwrap();
    let second = run_binned_on(input, &binned_config()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_binned_probabilities_sum_to_one() {
    let input = "0 0.1\n0 0.2\n0 1.1\n0 2.9\n0 2.0\n";
    let output = run_binned_on(input, &binned_config()).unwrap();
    let total: f64 = output
        .lines()
        .map(|line| line.split('\t').nth(1).unwrap().parse::<f64>().unwrap())
        .sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-8);
}

#[test]
fn test_binned_rejects_value_at_upper_bound() {
    let err = run_binned_on("0 3.0\n", &binned_config()).unwrap_err();
    assert!(matches!(err, Error::ValueAboveRange { .. }));
}

#[test]
fn test_binned_empty_input_is_empty_distribution() {
    let err = run_binned_on("", &binned_config()).unwrap_err();
    assert!(matches!(err, Error::EmptyDistribution));
}

#[test]
fn test_binned_malformed_line_is_reported() {
    let err = run_binned_on("0 1.5\n0\n", &binned_config()).unwrap_err();
    match err {
        Error::MalformedRecord { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_discrete_row_mode_integer_tally() {
    let config = DiscreteConfig {
        selector: Selector::Row(0),
        filter: NullFilter::keep_all(),
        are_int: true,
        precision: 8,
    };
    let mut out = Vec::new();
    run_discrete(Cursor::new("1 2 2 3 3 3\n"), &mut out, &config).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1\t0.16666667\n\
         2\t0.33333333\n\
         3\t0.50000000\n"
    );
}

#[test]
fn test_discrete_float_keys_print_at_precision() {
    let config = DiscreteConfig {
        selector: Selector::Column(0),
        filter: NullFilter::keep_all(),
        are_int: false,
        precision: 4,
    };
    let mut out = Vec::new();
    run_discrete(Cursor::new("1.25\n1.25\n2.5\n3.75\n"), &mut out, &config).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "1.2500\t0.5000\n2.5000\t0.2500\n3.7500\t0.2500\n"
    );
}

#[test]
fn test_discrete_tolerance_boundary() {
    // a value exactly at the tolerance is dropped when filtering is on,
    // kept otherwise
    let filtering = DiscreteConfig {
        selector: Selector::Column(0),
        filter: NullFilter::new(true, 0.5),
        are_int: false,
        precision: 8,
    };
    let mut out = Vec::new();
    run_discrete(Cursor::new("0.5\n2.0\n"), &mut out, &filtering).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2.00000000\t1.00000000\n");

    let keeping = DiscreteConfig {
        filter: NullFilter::keep_all(),
        ..filtering
    };
    let mut out = Vec::new();
    run_discrete(Cursor::new("0.5\n2.0\n"), &mut out, &keeping).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0.50000000\t0.50000000\n2.00000000\t0.50000000\n"
    );
}

#[test]
fn test_discrete_fully_filtered_input_is_empty_distribution() {
    let config = DiscreteConfig {
        selector: Selector::Column(0),
        filter: NullFilter::new(true, 1e-10),
        are_int: false,
        precision: 8,
    };
    let mut out = Vec::new();
    let err = run_discrete(Cursor::new("0.0\n0.0\n"), &mut out, &config).unwrap_err();
    assert!(matches!(err, Error::EmptyDistribution));
    assert!(out.is_empty());
}

fn power_law_config(mode: PowerLawMode) -> PowerLawConfig {
    PowerLawConfig {
        selector: Selector::Column(0),
        filter: NullFilter::keep_all(),
        mode,
        precision: 8,
    }
}

fn run_power_law_on(input: &str, mode: PowerLawMode) -> Result<String, Error> {
    let mut out = Vec::new();
    run_power_law(Cursor::new(input), &mut out, &power_law_config(mode))?;
    Ok(String::from_utf8(out).unwrap())
}

const DEGREE_SEQUENCE: &str = "1\n1\n1\n2\n2\n3\n5\n8\n13\n21\n";

#[test]
fn test_power_law_pmf_rows() {
    let output = run_power_law_on(DEGREE_SEQUENCE, PowerLawMode::Pmf).unwrap();
    let keys: Vec<&str> = output
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(keys, vec!["1", "2", "3", "5", "8", "13", "21"]);

    let masses: Vec<f64> = output
        .lines()
        .map(|line| line.split('\t').nth(1).unwrap().parse().unwrap())
        .collect();
    assert_relative_eq!(masses.iter().sum::<f64>(), 1.0, epsilon = 1e-8);
    assert_relative_eq!(masses[0], 0.3, epsilon = 1e-8);
}

#[test]
fn test_power_law_ccdf_is_non_increasing() {
    let output = run_power_law_on(DEGREE_SEQUENCE, PowerLawMode::Ccdf).unwrap();
    let values: Vec<f64> = output
        .lines()
        .map(|line| line.split('\t').nth(1).unwrap().parse().unwrap())
        .collect();

    // first bin is non-empty, so the first CCDF value is already below one
    assert!(values[0] < 1.0);
    for pair in values.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    assert_relative_eq!(*values.last().unwrap(), 0.0, epsilon = 1e-8);
}

#[test]
fn test_power_law_log_bins_emit_bounds() {
    let output = run_power_law_on(DEGREE_SEQUENCE, PowerLawMode::LogarithmicBins).unwrap();
    let mut previous_lower = f64::NEG_INFINITY;
    let mut total = 0.0;
    for line in output.lines() {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 3);
        let lower: f64 = fields[0].parse().unwrap();
        let upper: f64 = fields[1].parse().unwrap();
        assert!(lower > previous_lower);
        assert!(upper > lower);
        previous_lower = lower;
        total += fields[2].parse::<f64>().unwrap();
    }
    // max 21 -> two decades, 19 bins
    assert_eq!(output.lines().count(), 19);
    assert_relative_eq!(total, 1.0, epsilon = 1e-6);
}

#[test]
fn test_power_law_rejects_non_positive_data_in_log_mode() {
    let err = run_power_law_on("0\n0\n", PowerLawMode::LogarithmicBins).unwrap_err();
    assert!(matches!(err, Error::InvalidLogDomain { .. }));
}

//! Binned empirical distribution from raw columnar data

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;

use empirical_cli::args::{FilterArgs, InputArgs};
use empirical_cli::pipeline::{run_binned, BinnedConfig};

/// Compute a binned empirical distribution from a column or row of a
/// whitespace-delimited text file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    filter: FilterArgs,

    /// Number of bins
    #[arg(short = 'b', long, default_value_t = 10)]
    number_of_bins: usize,

    /// Lower bound of the bins
    #[arg(short, long)]
    lower_bound: f64,

    /// Upper bound of the bins
    #[arg(short, long)]
    upper_bound: f64,
}

fn main() -> anyhow::Result<()> {
    empirical_cli::init_tracing();
    let args = Args::parse();

    let config = BinnedConfig {
        selector: args.input.selector(),
        filter: args.filter.filter(),
        lower_bound: args.lower_bound,
        upper_bound: args.upper_bound,
        number_of_bins: args.number_of_bins,
        precision: args.input.precision,
    };

    let file = File::open(&args.input.input_path)
        .with_context(|| format!("cannot open {}", args.input.input_path.display()))?;
    let mut stdout = io::stdout().lock();
    run_binned(BufReader::new(file), &mut stdout, &config)?;
    Ok(())
}

//! Un-binned empirical distribution from raw columnar data

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;

use empirical_cli::args::{FilterArgs, InputArgs};
use empirical_cli::pipeline::{run_discrete, DiscreteConfig};

/// Compute the discrete empirical distribution of a column or row of a
/// whitespace-delimited text file, one bin per distinct value.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    filter: FilterArgs,

    /// Key values are integers
    #[arg(long)]
    are_int: bool,
}

fn main() -> anyhow::Result<()> {
    empirical_cli::init_tracing();
    let args = Args::parse();

    let config = DiscreteConfig {
        selector: args.input.selector(),
        filter: args.filter.filter(),
        are_int: args.are_int,
        precision: args.input.precision,
    };

    let file = File::open(&args.input.input_path)
        .with_context(|| format!("cannot open {}", args.input.input_path.display()))?;
    let mut stdout = io::stdout().lock();
    run_discrete(BufReader::new(file), &mut stdout, &config)?;
    Ok(())
}

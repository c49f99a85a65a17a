//! Graphical representations of empirical power-law count data

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;

use empirical_cli::args::{FilterArgs, InputArgs};
use empirical_cli::pipeline::{run_power_law, PowerLawConfig, PowerLawMode};

/// Produce the empirical PMF, the un-binned CCDF, or a logarithmically
/// binned histogram of integer count data.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    filter: FilterArgs,

    /// Produce a logarithmically binned histogram
    #[arg(short = 'L', long, conflicts_with = "ccdf")]
    logarithmic_bins: bool,

    /// Produce the un-binned empirical CCDF
    #[arg(short = 'C', long)]
    ccdf: bool,
}

impl Args {
    fn mode(&self) -> PowerLawMode {
        if self.logarithmic_bins {
            PowerLawMode::LogarithmicBins
        } else if self.ccdf {
            PowerLawMode::Ccdf
        } else {
            PowerLawMode::Pmf
        }
    }
}

fn main() -> anyhow::Result<()> {
    empirical_cli::init_tracing();
    let args = Args::parse();

    let config = PowerLawConfig {
        selector: args.input.selector(),
        filter: args.filter.filter(),
        mode: args.mode(),
        precision: args.input.precision,
    };

    let file = File::open(&args.input.input_path)
        .with_context(|| format!("cannot open {}", args.input.input_path.display()))?;
    let mut stdout = io::stdout().lock();
    run_power_law(BufReader::new(file), &mut stdout, &config)?;
    Ok(())
}

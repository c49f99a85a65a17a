//! Shared argument structs and pipeline glue for the distribution tools
//!
//! Each binary is a thin wrapper: parse arguments, open the input file, and
//! hand a buffered reader plus locked stdout to the matching pipeline in
//! [`pipeline`]. The pipelines are generic over `(BufRead, Write)` so the
//! integration tests drive them over in-memory buffers.

pub mod args;
pub mod pipeline;

use tracing_subscriber::EnvFilter;

/// Route diagnostics to stderr so they never mix into the data output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

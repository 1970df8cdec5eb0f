//! Runs the heap buffer walkthrough on stdout.
//!
//! Exit status is 0 when the buffer was allocated and printed, 1 when the
//! allocation failed or stdout could not be written. Diagnostics go to
//! stderr, filtered by `RUST_LOG` (default `warn`).

use std::io;
use std::process::ExitCode;

use heapbuf_demo::{run, DemoConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&DemoConfig::default(), &mut out) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            tracing::error!(%err, "run aborted");
            ExitCode::FAILURE
        }
    }
}

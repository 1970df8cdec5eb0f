//! Allocate → populate → print → release.

use std::io::{self, Write};
use std::process::ExitCode;

use heapbuf_arena::{Buffer, BufferError, BufferPool, Element};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{DemoConfig, DemoConfigError};

/// Line printed when the buffer cannot be allocated.
pub const ALLOCATION_FAILED_MESSAGE: &str = "Memory allocation failed!";

/// How a scenario run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The buffer was allocated, printed and released.
    Completed,
    /// The pool refused the allocation; nothing was printed but the
    /// failure message.
    AllocationFailed,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Completed => 0,
            Self::AllocationFailed => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}

/// Errors that abort a run before it reaches an [`Outcome`].
#[derive(Debug, Error)]
pub enum DemoError {
    /// The config can never produce a run.
    #[error("invalid config: {0}")]
    Config(#[from] DemoConfigError),
    /// A buffer operation failed for a reason other than allocation.
    #[error(transparent)]
    Buffer(#[from] BufferError),
    /// Writing the report failed.
    #[error("writing output: {0}")]
    Io(#[from] io::Error),
}

/// Store `i * 2` in every slot `i`.
pub fn populate(buffer: &mut Buffer<'_>) {
    buffer.fill_with(|i| (i as Element).wrapping_mul(2));
}

/// Write one `arr[<i>] = <v>` line per slot, ascending.
pub fn render<W: Write>(buffer: &Buffer<'_>, out: &mut W) -> io::Result<()> {
    for (i, value) in buffer.entries() {
        writeln!(out, "arr[{i}] = {value}")?;
    }
    Ok(())
}

/// Run the whole scenario against `out`.
///
/// Allocation failure is not an error here: it prints
/// [`ALLOCATION_FAILED_MESSAGE`] and yields [`Outcome::AllocationFailed`].
/// The buffer is released on every path, including I/O errors.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<Outcome, DemoError> {
    config.validate()?;
    let pool = BufferPool::new(config.pool.clone()).map_err(DemoConfigError::Pool)?;

    let mut buffer = match pool.allocate(config.capacity) {
        Ok(buffer) => buffer,
        Err(err @ BufferError::AllocationFailed { .. }) => {
            info!(%err, "aborting run");
            writeln!(out, "{ALLOCATION_FAILED_MESSAGE}")?;
            out.flush()?;
            return Ok(Outcome::AllocationFailed);
        }
        Err(err) => return Err(err.into()),
    };

    populate(&mut buffer);
    render(&buffer, out)?;
    out.flush()?;
    buffer.release();

    let stats = pool.stats();
    debug!(
        allocations = stats.allocations,
        releases = stats.releases,
        peak_bytes = stats.peak_bytes,
        "run complete"
    );
    Ok(Outcome::Completed)
}

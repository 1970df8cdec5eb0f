//! Error types for buffer allocation and access.

use thiserror::Error;

use crate::id::BufferId;
use crate::lifecycle::BufferState;

/// Errors that can occur while allocating or accessing a buffer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The memory system could not provide the requested block.
    #[error("{}", allocation_failed_message(.requested, .available))]
    AllocationFailed {
        /// Number of bytes requested. Saturates at `usize::MAX` when the
        /// byte size itself overflowed.
        requested: usize,
        /// Bytes still available in the pool's budget, if it has one.
        available: Option<usize>,
    },
    /// A buffer must hold at least one element.
    #[error("buffer capacity must be positive")]
    ZeroCapacity,
    /// An index outside `[0, capacity)` was used for a read or write.
    #[error("index {index} out of range for buffer of capacity {capacity}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Capacity of the buffer.
        capacity: usize,
    },
    /// A buffer was moved between lifecycle states in an illegal order,
    /// e.g. released twice.
    #[error("buffer {id}: illegal lifecycle transition {from} -> {to}")]
    LifecycleViolation {
        /// The buffer whose ledger entry was touched.
        id: BufferId,
        /// State recorded before the transition.
        from: BufferState,
        /// State that was requested.
        to: BufferState,
    },
}

fn allocation_failed_message(requested: &usize, available: &Option<usize>) -> String {
    match available {
        Some(available) => format!(
            "memory allocation failed: requested {requested} bytes, {available} bytes available"
        ),
        None => format!("memory allocation failed: requested {requested} bytes"),
    }
}

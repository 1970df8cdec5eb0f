//! The buffer lifecycle state machine.
//!
//! ```text
//! Unallocated ──allocate──▶ Allocated ──release──▶ Released
//! ```
//!
//! `Released` is terminal. A failed allocation never leaves `Unallocated`.

use std::fmt;

use crate::error::BufferError;
use crate::id::BufferId;

/// Lifecycle state of a single buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferState {
    /// No memory has been reserved for this buffer.
    Unallocated,
    /// Memory is reserved and the buffer may be read and written.
    Allocated,
    /// Memory has been returned to the pool. Terminal.
    Released,
}

impl BufferState {
    /// Move `id` from `self` to `next`.
    ///
    /// Only `Unallocated -> Allocated` and `Allocated -> Released` are legal.
    pub fn transition(self, id: BufferId, next: BufferState) -> Result<BufferState, BufferError> {
        match (self, next) {
            (Self::Unallocated, Self::Allocated) | (Self::Allocated, Self::Released) => Ok(next),
            (from, to) => Err(BufferError::LifecycleViolation { id, from, to }),
        }
    }
}

impl fmt::Display for BufferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unallocated => "unallocated",
            Self::Allocated => "allocated",
            Self::Released => "released",
        };
        f.write_str(name)
    }
}

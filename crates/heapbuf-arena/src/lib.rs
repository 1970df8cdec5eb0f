//! Owned, bounds-checked integer buffers with pool accounting.
//!
//! A [`BufferPool`] hands out [`Buffer`]s. Each buffer owns a contiguous
//! `Vec<i32>` of fixed capacity and borrows the pool for its lifetime, so
//! the bytes it reserved are always returned to the pool exactly once:
//! either through [`Buffer::release`] or when the buffer is dropped.
//!
//! ```text
//! BufferPool
//! ├── PoolConfig (optional byte budget)
//! ├── counters   (live/peak bytes, allocations, releases, failures)
//! └── ledger     (BufferId → BufferState)
//!
//! Buffer<'pool>
//! ├── &'pool BufferPool
//! ├── BufferId
//! └── Vec<i32>   (zero-initialised, never resized)
//! ```
//!
//! # Safety
//!
//! No `unsafe`. Allocation failure is detected with
//! [`Vec::try_reserve_exact`] instead of aborting the process, and all
//! element access is bounds-checked.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod pool;
pub mod stats;

pub use buffer::Buffer;
pub use config::{ConfigError, PoolConfig};
pub use heapbuf_core::{BufferError, BufferId, BufferState, Element, ELEMENT_BYTES};
pub use pool::BufferPool;
pub use stats::PoolStats;

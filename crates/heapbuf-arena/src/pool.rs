//! Byte accounting and lifecycle ledger for buffers.
//!
//! [`BufferPool`] sits between callers and the system allocator. It checks
//! each request against the configured byte budget, reserves the backing
//! `Vec` fallibly, and records every live buffer in a ledger keyed by
//! [`BufferId`]. Entries leave the ledger on release, so its size tracks
//! live buffers rather than total allocations. Single-threaded: counters
//! live in `Cell`s and the pool is `!Sync`.

use std::cell::{Cell, RefCell};

use heapbuf_core::{BufferError, BufferId, BufferState, Element, ELEMENT_BYTES};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::buffer::Buffer;
use crate::config::{ConfigError, PoolConfig};
use crate::stats::PoolStats;

/// Memory pool that allocates and reclaims [`Buffer`]s.
#[derive(Debug)]
pub struct BufferPool {
    config: PoolConfig,
    live_bytes: Cell<usize>,
    peak_bytes: Cell<usize>,
    allocations: Cell<u64>,
    releases: Cell<u64>,
    failures: Cell<u64>,
    /// ID handed to the next successful allocation. Every ID below it has
    /// been issued.
    next_id: Cell<BufferId>,
    /// Live buffers only.
    ledger: RefCell<IndexMap<BufferId, BufferState>>,
}

impl BufferPool {
    /// Create a pool from a validated config.
    pub fn new(config: PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Create a pool limited only by the system allocator.
    pub fn unbounded() -> Self {
        Self::with_config(PoolConfig::new())
    }

    fn with_config(config: PoolConfig) -> Self {
        Self {
            config,
            live_bytes: Cell::new(0),
            peak_bytes: Cell::new(0),
            allocations: Cell::new(0),
            releases: Cell::new(0),
            failures: Cell::new(0),
            next_id: Cell::new(BufferId(0)),
            ledger: RefCell::new(IndexMap::new()),
        }
    }

    /// Allocate a zero-initialised buffer of `capacity` elements.
    ///
    /// Fails with [`BufferError::ZeroCapacity`] for `capacity == 0`, and with
    /// [`BufferError::AllocationFailed`] when the byte size overflows, the
    /// pool's budget would be exceeded, the pool has run out of IDs, or the
    /// system allocator refuses the reservation. Failures are counted but
    /// never retried.
    pub fn allocate(&self, capacity: usize) -> Result<Buffer<'_>, BufferError> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }

        let available = self.available_bytes();
        let Some(requested) = capacity.checked_mul(ELEMENT_BYTES) else {
            return Err(self.reject(usize::MAX, available));
        };
        if available.is_some_and(|available| requested > available) {
            return Err(self.reject(requested, available));
        }
        let id = self.next_id.get();
        let Some(following) = id.next() else {
            return Err(self.reject(requested, available));
        };

        let mut data: Vec<Element> = Vec::new();
        if data.try_reserve_exact(capacity).is_err() {
            return Err(self.reject(requested, available));
        }
        data.resize(capacity, 0);

        self.record_allocation(id, requested)?;
        self.next_id.set(following);
        debug!(buffer = %id, capacity, bytes = requested, "buffer allocated");
        Ok(Buffer::new(self, id, data))
    }

    /// Bytes left in the budget, or `None` for an unbounded pool.
    pub fn available_bytes(&self) -> Option<usize> {
        self.config
            .max_bytes
            .map(|max| max.saturating_sub(self.live_bytes.get()))
    }

    /// Lifecycle state of `id`.
    ///
    /// Live IDs are `Allocated`; issued IDs that are no longer live are
    /// `Released`; IDs this pool never issued are `Unallocated`.
    pub fn state_of(&self, id: BufferId) -> BufferState {
        if let Some(&state) = self.ledger.borrow().get(&id) {
            return state;
        }
        if id < self.next_id.get() {
            BufferState::Released
        } else {
            BufferState::Unallocated
        }
    }

    /// Snapshot of the pool's counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            allocations: self.allocations.get(),
            releases: self.releases.get(),
            failures: self.failures.get(),
            live_bytes: self.live_bytes.get(),
            peak_bytes: self.peak_bytes.get(),
        }
    }

    /// Return a buffer's bytes to the pool and drop its ledger entry.
    ///
    /// Called from `Buffer`'s `Drop` impl only.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not currently `Allocated`. Buffer ownership makes
    /// this unreachable; hitting it means the ledger is corrupt.
    pub(crate) fn release(&self, id: BufferId, bytes: usize) {
        let from = self.state_of(id);
        if let Err(err) = from.transition(id, BufferState::Released) {
            panic!("{err}");
        }
        self.ledger.borrow_mut().swap_remove(&id);

        self.live_bytes.set(self.live_bytes.get() - bytes);
        self.releases.set(self.releases.get() + 1);
        debug!(buffer = %id, bytes, "buffer released");
    }

    fn record_allocation(&self, id: BufferId, bytes: usize) -> Result<(), BufferError> {
        let state = self.state_of(id).transition(id, BufferState::Allocated)?;
        self.ledger.borrow_mut().insert(id, state);

        let live = self.live_bytes.get() + bytes;
        self.live_bytes.set(live);
        self.peak_bytes.set(self.peak_bytes.get().max(live));
        self.allocations.set(self.allocations.get() + 1);
        Ok(())
    }

    fn reject(&self, requested: usize, available: Option<usize>) -> BufferError {
        self.failures.set(self.failures.get() + 1);
        warn!(requested, ?available, "buffer allocation failed");
        BufferError::AllocationFailed {
            requested,
            available,
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::unbounded()
    }
}

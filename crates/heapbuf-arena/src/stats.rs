//! Point-in-time pool counters.

/// Snapshot of a pool's accounting counters.
///
/// Returned by [`BufferPool::stats`](crate::BufferPool::stats). Counters are
/// cumulative over the pool's lifetime except `live_bytes`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Successful allocations.
    pub allocations: u64,
    /// Releases (explicit or on drop).
    pub releases: u64,
    /// Rejected allocation requests.
    pub failures: u64,
    /// Bytes currently held by live buffers.
    pub live_bytes: usize,
    /// Highest value `live_bytes` has reached.
    pub peak_bytes: usize,
}

impl PoolStats {
    /// Buffers allocated and not yet released.
    pub fn live_buffers(&self) -> u64 {
        self.allocations - self.releases
    }

    /// Whether every allocated buffer has been released.
    pub fn is_balanced(&self) -> bool {
        self.allocations == self.releases && self.live_bytes == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_balanced() {
        let stats = PoolStats::default();
        assert!(stats.is_balanced());
        assert_eq!(stats.live_buffers(), 0);
    }

    #[test]
    fn outstanding_buffer_is_unbalanced() {
        let stats = PoolStats {
            allocations: 2,
            releases: 1,
            failures: 0,
            live_bytes: 20,
            peak_bytes: 40,
        };
        assert_eq!(stats.live_buffers(), 1);
        assert!(!stats.is_balanced());
    }
}

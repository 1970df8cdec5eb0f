//! Integration test: the allocate → populate → read → release lifecycle
//! through the public API only.

use heapbuf_arena::{BufferError, BufferPool, BufferState, PoolConfig, ELEMENT_BYTES};

#[test]
fn five_element_scenario_reads_back_doubled_indices() {
    let pool = BufferPool::unbounded();
    let mut buf = pool.allocate(5).expect("allocation of 5 ints");
    for i in 0..buf.capacity() {
        buf.write(i, i as i32 * 2).unwrap();
    }

    let read_back: Vec<i32> = (0..5).map(|i| buf.read(i).unwrap()).collect();
    assert_eq!(read_back, vec![0, 2, 4, 6, 8]);

    let id = buf.id();
    buf.release();

    let stats = pool.stats();
    assert_eq!(stats.allocations, 1);
    assert_eq!(stats.releases, 1);
    assert_eq!(stats.peak_bytes, 5 * ELEMENT_BYTES);
    assert!(stats.is_balanced());
    assert_eq!(pool.state_of(id), BufferState::Released);
}

#[test]
fn failed_allocation_leaves_no_ledger_entry() {
    let pool = BufferPool::new(PoolConfig::new().with_max_bytes(4)).unwrap();
    let err = pool.allocate(5).unwrap_err();
    assert!(matches!(err, BufferError::AllocationFailed { .. }));

    let stats = pool.stats();
    assert_eq!(stats.failures, 1);
    assert_eq!(stats.allocations, 0);
    assert_eq!(stats.releases, 0);
    assert_eq!(pool.state_of(heapbuf_arena::BufferId(0)), BufferState::Unallocated);
}

#[test]
fn buffers_released_in_any_order_balance_the_pool() {
    let pool = BufferPool::unbounded();
    let a = pool.allocate(3).unwrap();
    let b = pool.allocate(7).unwrap();
    let c = pool.allocate(1).unwrap();
    assert_eq!(pool.stats().live_buffers(), 3);

    b.release();
    assert_eq!(pool.stats().live_bytes, 4 * ELEMENT_BYTES);
    drop(c);
    a.release();

    assert!(pool.stats().is_balanced());
    assert_eq!(pool.stats().peak_bytes, 11 * ELEMENT_BYTES);
}

#[test]
fn release_happens_during_unwind() {
    let pool = BufferPool::unbounded();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let buf = pool.allocate(2).unwrap();
        let _value = buf[2];
    }));
    assert!(result.is_err());
    assert_eq!(pool.stats().releases, 1);
    assert!(pool.stats().is_balanced());
}

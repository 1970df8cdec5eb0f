//! Strongly-typed buffer identifiers.

use std::fmt;

/// Identifies a buffer within the pool that allocated it.
///
/// IDs are assigned sequentially by the pool, starting at zero. They are
/// never reused within a pool, so a released buffer's ID keeps pointing at
/// its `Released` ledger entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u64);

impl BufferId {
    /// The ID following this one, or `None` once the ID space is spent.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Pool configuration parameters.

use thiserror::Error;

/// Configuration for a [`BufferPool`](crate::BufferPool).
///
/// Validated at pool construction; immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolConfig {
    /// Upper bound on bytes held by live buffers at any one time.
    ///
    /// Default: `None`, i.e. limited only by the system allocator.
    /// `Some(0)` is rejected.
    pub max_bytes: Option<usize>,
}

impl PoolConfig {
    /// Default byte budget (unbounded).
    pub const DEFAULT_MAX_BYTES: Option<usize> = None;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
        }
    }

    /// Set the byte budget.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Check the config for values that can never produce a usable pool.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bytes == Some(0) {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }
}

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_bytes` was `Some(0)`; no buffer could ever be allocated.
    #[error("pool byte budget must be positive")]
    ZeroBudget,
}

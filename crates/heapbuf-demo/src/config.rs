//! Scenario configuration.

use heapbuf_arena::{ConfigError, PoolConfig};
use thiserror::Error;

/// Parameters of the allocate/populate/print/release scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of integers to allocate.
    pub capacity: usize,
    /// Pool the buffer is allocated from.
    pub pool: PoolConfig,
}

impl DemoConfig {
    /// Default buffer capacity.
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Create a config for `capacity` elements on an unbounded pool.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            pool: PoolConfig::new(),
        }
    }

    /// Replace the pool config.
    pub fn with_pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    /// Reject configs that can never run.
    pub fn validate(&self) -> Result<(), DemoConfigError> {
        if self.capacity == 0 {
            return Err(DemoConfigError::ZeroCapacity);
        }
        self.pool.validate()?;
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

/// Rejected scenario configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DemoConfigError {
    /// A buffer capacity of zero was configured.
    #[error("buffer capacity must be positive")]
    ZeroCapacity,
    /// The pool config is invalid.
    #[error(transparent)]
    Pool(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_unbounded() {
        let config = DemoConfig::default();
        assert_eq!(config.capacity, 5);
        assert_eq!(config.pool.max_bytes, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            DemoConfig::new(0).validate(),
            Err(DemoConfigError::ZeroCapacity)
        );
    }

    #[test]
    fn pool_errors_propagate() {
        let config = DemoConfig::default().with_pool(PoolConfig::new().with_max_bytes(0));
        assert_eq!(
            config.validate(),
            Err(DemoConfigError::Pool(ConfigError::ZeroBudget))
        );
    }
}

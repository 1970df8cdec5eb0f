//! Benchmark profiles for the heapbuf buffer lifecycle manager.
//!
//! - [`reference_profile`]: the five-element walkthrough
//! - [`stress_profile`]: one million elements on an unbounded pool

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use heapbuf_demo::DemoConfig;

/// Element count of [`stress_profile`].
pub const STRESS_CAPACITY: usize = 1_000_000;

/// The default five-element scenario.
pub fn reference_profile() -> DemoConfig {
    DemoConfig::default()
}

/// A large buffer for measuring populate/render throughput.
pub fn stress_profile() -> DemoConfig {
    DemoConfig::new(STRESS_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        assert!(reference_profile().validate().is_ok());
        assert!(stress_profile().validate().is_ok());
        assert_eq!(stress_profile().capacity, STRESS_CAPACITY);
    }
}

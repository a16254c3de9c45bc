//! Domain service for GCD computation
//!
//! Stateless wrapper around [`crate::compute::gcd`] shared by the gRPC
//! server and by in-process callers such as the gateway.

use tracing::debug;

use crate::compute;

/// Stateless GCD service.
#[derive(Debug, Clone, Default)]
pub struct GcdCalculator;

impl GcdCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute gcd(a, b). Never fails.
    pub fn compute(&self, a: u64, b: u64) -> u64 {
        let result = compute::gcd(a, b);
        debug!(a, b, result, "computed gcd");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute() {
        let calculator = GcdCalculator::new();
        assert_eq!(calculator.compute(294, 462), 42);
        assert_eq!(calculator.compute(0, 0), 0);
    }
}

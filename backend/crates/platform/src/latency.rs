//! Simulated Latency
//!
//! The mock services pause before answering so that front ends exercise
//! their loading states the same way they would against a real backend.

use std::time::Duration;

/// A fixed artificial delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    pub const fn new(delay: Duration) -> Self {
        Self(delay)
    }

    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// No delay at all (tests, benchmarks)
    pub const fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.0
    }

    /// Scale the delay, e.g. `0.1` for a snappier demo.
    /// Negative or non-finite factors yield no delay.
    pub fn scaled(self, factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return Self::none();
        }
        Self(self.0.mul_f64(factor))
    }

    /// Sleep for the configured delay.
    pub async fn wait(&self) {
        if self.0.is_zero() {
            return;
        }
        tokio::time::sleep(self.0).await;
    }
}

//! Application Configuration

use platform::latency::SimulatedLatency;

/// Delays of the mock card service
#[derive(Debug, Clone)]
pub struct CardConfig {
    pub list_latency: SimulatedLatency,
    pub create_latency: SimulatedLatency,
    pub update_latency: SimulatedLatency,
    pub delete_latency: SimulatedLatency,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            list_latency: SimulatedLatency::from_millis(800),
            create_latency: SimulatedLatency::from_millis(1000),
            update_latency: SimulatedLatency::from_millis(1000),
            delete_latency: SimulatedLatency::from_millis(800),
        }
    }
}

impl CardConfig {
    /// No delays (for tests)
    pub fn instant() -> Self {
        Self {
            list_latency: SimulatedLatency::none(),
            create_latency: SimulatedLatency::none(),
            update_latency: SimulatedLatency::none(),
            delete_latency: SimulatedLatency::none(),
        }
    }

    pub fn with_latency_scale(self, factor: f64) -> Self {
        Self {
            list_latency: self.list_latency.scaled(factor),
            create_latency: self.create_latency.scaled(factor),
            update_latency: self.update_latency.scaled(factor),
            delete_latency: self.delete_latency.scaled(factor),
        }
    }
}

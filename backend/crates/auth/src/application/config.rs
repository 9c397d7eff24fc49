//! Application Configuration
//!
//! Knobs of the mock auth flow.

use platform::latency::SimulatedLatency;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Delay before every auth operation answers
    pub latency: SimulatedLatency,
    /// Token handed out on login
    pub mock_token: String,
    /// Registering this address fails as "already in use"
    pub taken_email: String,
    /// Requesting a reset for this address fails as "not found"
    pub unknown_email: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency: SimulatedLatency::from_millis(1000),
            mock_token: "fake-jwt-token".to_string(),
            taken_email: "erro@teste.com".to_string(),
            unknown_email: "naoexiste@teste.com".to_string(),
        }
    }
}

impl AuthConfig {
    /// Defaults without artificial delay (for tests)
    pub fn instant() -> Self {
        Self {
            latency: SimulatedLatency::none(),
            ..Default::default()
        }
    }

    /// Multiply the delay, e.g. `0.0` to disable it in a demo
    pub fn with_latency_scale(mut self, factor: f64) -> Self {
        self.latency = self.latency.scaled(factor);
        self
    }
}

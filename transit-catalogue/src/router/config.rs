//! Routing configuration.

use serde::Deserialize;

/// Error returned when routing settings cannot produce meaningful times.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SettingsError {
    /// Velocity must be a positive, finite number
    #[error("bus velocity must be positive, got {0}")]
    InvalidVelocity(f64),

    /// Wait time must be a non-negative, finite number
    #[error("bus wait time must not be negative, got {0}")]
    InvalidWaitTime(f64),
}

/// Parameters that turn road distances into travel times.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before each boarding.
    pub bus_wait_time: f64,

    /// Average bus speed (km/h).
    pub bus_velocity: f64,
}

impl RoutingSettings {
    /// Create settings from a wait time in minutes and a velocity in km/h.
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check that the settings yield finite, non-negative edge weights.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.bus_velocity.is_finite() && self.bus_velocity > 0.0) {
            return Err(SettingsError::InvalidVelocity(self.bus_velocity));
        }
        if !(self.bus_wait_time.is_finite() && self.bus_wait_time >= 0.0) {
            return Err(SettingsError::InvalidWaitTime(self.bus_wait_time));
        }
        Ok(())
    }

    /// Minutes needed to ride `distance` meters.
    pub fn travel_time(&self, distance: u64) -> f64 {
        distance as f64 / 1000.0 * 60.0 / self.bus_velocity
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6.0,
            bus_velocity: 40.0,
        }
    }
}

/// Configuration for the shortest-path solver.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Maximum number of memoised vertex-to-vertex answers.
    pub cache_capacity: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 10_000,
        }
    }
}

//! Simulated service restarts on the hero rack.
//!
//! Every check picks one unit at random and, with a small probability, turns
//! its LED off for a couple of seconds as if the service restarted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ServerStatusConfig;

/// One service unit in the rack illustration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUnit {
    pub name: String,
    pub led_active: bool,
}

impl ServerUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            led_active: true,
        }
    }

    pub fn led_class(&self) -> &'static str {
        if self.led_active {
            "unit-led active"
        } else {
            "unit-led"
        }
    }
}

pub struct ServerStatusSimulator {
    units: Vec<ServerUnit>,
    config: ServerStatusConfig,
    rng: StdRng,
}

impl ServerStatusSimulator {
    pub fn new(units: Vec<ServerUnit>, config: ServerStatusConfig) -> Self {
        Self::with_rng(units, config, StdRng::from_os_rng())
    }

    pub fn seeded(units: Vec<ServerUnit>, config: ServerStatusConfig, seed: u64) -> Self {
        Self::with_rng(units, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(units: Vec<ServerUnit>, config: ServerStatusConfig, rng: StdRng) -> Self {
        Self { units, config, rng }
    }

    pub fn units(&self) -> &[ServerUnit] {
        &self.units
    }

    pub fn config(&self) -> &ServerStatusConfig {
        &self.config
    }

    /// Run one check.
    ///
    /// Returns the index of the unit taken offline, if any. The host restores
    /// it after [`ServerStatusConfig::offline_for`].
    pub fn check(&mut self) -> Option<usize> {
        if self.units.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..self.units.len());
        let roll: f64 = self.rng.random();
        if roll <= 1.0 - self.config.flicker_chance {
            return None;
        }

        let unit = &mut self.units[index];
        if !unit.led_active {
            return None;
        }
        unit.led_active = false;
        tracing::debug!(unit = %unit.name, "Simulated service restart");
        Some(index)
    }

    /// Bring a unit back online.
    pub fn restore(&mut self, index: usize) {
        if let Some(unit) = self.units.get_mut(index) {
            unit.led_active = true;
        }
    }
}

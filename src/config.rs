//! Controller configuration parameters
//!
//! All tunable parameters of the washing cycle.  Every field has a default,
//! so a partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::laundry::Program;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasherConfig {
    // --- Load ---
    /// Heaviest batch accepted (kg).  Heavier batches fail with `TooHeavy`.
    pub max_weight_kg: f64,

    // --- Autodetect ---
    /// Dirt degree at or below which `Autodetect` resolves to `Medium`.
    pub dirt_threshold_percent: u8,

    // --- Water ---
    /// Litres poured per kilogram of laundry
    pub litres_per_kg: f64,

    // --- Program durations (minutes) ---
    pub short_minutes: u32,
    pub medium_minutes: u32,
    pub long_minutes: u32,
}

impl Default for WasherConfig {
    fn default() -> Self {
        Self {
            max_weight_kg: 9.0,
            dirt_threshold_percent: 40,
            litres_per_kg: 6.0,
            short_minutes: 30,
            medium_minutes: 90,
            long_minutes: 120,
        }
    }
}

impl WasherConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make a cycle meaningless.
    /// Invalid ranges are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_weight_kg.is_finite() || self.max_weight_kg <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "max_weight_kg must be finite and > 0",
            ));
        }
        if self.dirt_threshold_percent > 100 {
            return Err(ConfigError::ValidationFailed(
                "dirt_threshold_percent must be <= 100",
            ));
        }
        if !self.litres_per_kg.is_finite() || self.litres_per_kg <= 0.0 {
            return Err(ConfigError::ValidationFailed(
                "litres_per_kg must be finite and > 0",
            ));
        }
        if self.short_minutes == 0 || self.medium_minutes == 0 || self.long_minutes == 0 {
            return Err(ConfigError::ValidationFailed(
                "program durations must be > 0",
            ));
        }
        Ok(())
    }

    /// Wash duration for a concrete program.  `None` for `Autodetect`,
    /// which has to be resolved first.
    pub fn minutes_for(&self, program: Program) -> Option<u32> {
        match program {
            Program::Short => Some(self.short_minutes),
            Program::Medium => Some(self.medium_minutes),
            Program::Long => Some(self.long_minutes),
            Program::Autodetect => None,
        }
    }

    /// Water to pour for a batch of `weight_kg`.
    pub fn litres_for(&self, weight_kg: f64) -> f64 {
        weight_kg * self.litres_per_kg
    }
}

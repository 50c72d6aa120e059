//! In-memory water pump.
//!
//! Tracks the drum water level against a fixed capacity.  Stands in for
//! the inlet valve and drain pump on host builds and in tests.
//!
//! ## Contract
//!
//! - `pour` rejects zero, negative, and non-finite amounts.
//! - `pour` rejects any amount that would overfill the drum; the level is
//!   left unchanged.
//! - `release` always drains to zero.

use log::debug;

use crate::app::ports::WaterPump;
use crate::error::PumpError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PumpState {
    Empty,
    Filled { litres: f64 },
}

pub struct SimWaterPump {
    capacity_litres: f64,
    state: PumpState,
    total_poured: f64,
    releases: u32,
}

impl SimWaterPump {
    pub fn new(capacity_litres: f64) -> Self {
        Self {
            capacity_litres,
            state: PumpState::Empty,
            total_poured: 0.0,
            releases: 0,
        }
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn level_litres(&self) -> f64 {
        match self.state {
            PumpState::Empty => 0.0,
            PumpState::Filled { litres } => litres,
        }
    }

    pub fn total_poured_litres(&self) -> f64 {
        self.total_poured
    }

    pub fn releases(&self) -> u32 {
        self.releases
    }
}

impl WaterPump for SimWaterPump {
    fn pour(&mut self, litres: f64) -> Result<(), PumpError> {
        if !litres.is_finite() || litres <= 0.0 {
            return Err(PumpError::InvalidAmount);
        }
        let level = self.level_litres() + litres;
        if level > self.capacity_litres {
            return Err(PumpError::Overflow);
        }
        self.state = PumpState::Filled { litres: level };
        self.total_poured += litres;
        debug!("pump: poured {:.1} L, level {:.1}/{:.1} L", litres, level, self.capacity_litres);
        Ok(())
    }

    fn release(&mut self) -> Result<(), PumpError> {
        debug!("pump: released {:.1} L", self.level_litres());
        self.state = PumpState::Empty;
        self.releases += 1;
        Ok(())
    }
}

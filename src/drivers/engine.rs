//! In-memory drum engine.
//!
//! Accumulates washed minutes and spin count instead of driving a motor.

use log::debug;

use crate::app::ports::Engine;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Washed,
    Spun,
}

pub struct SimEngine {
    state: EngineState,
    washed_minutes: u32,
    spins: u32,
}

impl SimEngine {
    pub fn new() -> Self {
        Self {
            state: EngineState::Idle,
            washed_minutes: 0,
            spins: 0,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Sum of every `run_washing` duration accepted so far.
    pub fn washed_minutes(&self) -> u32 {
        self.washed_minutes
    }

    pub fn spin_count(&self) -> u32 {
        self.spins
    }
}

impl Default for SimEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SimEngine {
    fn run_washing(&mut self, minutes: u32) -> Result<(), EngineError> {
        if minutes == 0 {
            return Err(EngineError::InvalidDuration);
        }
        self.washed_minutes = self.washed_minutes.saturating_add(minutes);
        self.state = EngineState::Washed;
        debug!("engine: washed {} min", minutes);
        Ok(())
    }

    fn spin(&mut self) -> Result<(), EngineError> {
        if self.state == EngineState::Idle {
            return Err(EngineError::NotWashed);
        }
        self.spins += 1;
        self.state = EngineState::Spun;
        debug!("engine: spin #{}", self.spins);
        Ok(())
    }
}

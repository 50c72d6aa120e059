//! Dirt detector returning a preset reading.

use crate::app::ports::DirtDetector;
use crate::error::DetectorError;
use crate::laundry::{LaundryBatch, Percentage};

pub struct FixedDirtDetector {
    reading: Percentage,
    reads: u32,
}

impl FixedDirtDetector {
    pub fn new(reading: Percentage) -> Self {
        Self { reading, reads: 0 }
    }

    /// Change the value returned by the next read.
    pub fn set_reading(&mut self, reading: Percentage) {
        self.reading = reading;
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }
}

impl DirtDetector for FixedDirtDetector {
    fn detect_dirt_degree(&mut self, _batch: &LaundryBatch) -> Result<Percentage, DetectorError> {
        self.reads += 1;
        Ok(self.reading)
    }
}

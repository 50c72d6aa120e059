//! In-memory device drivers for host builds and tests.

pub mod dirt;
pub mod engine;
pub mod pump;

pub use dirt::FixedDirtDetector;
pub use engine::{EngineState, SimEngine};
pub use pump::{PumpState, SimWaterPump};

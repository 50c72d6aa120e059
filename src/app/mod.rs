//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the washing rules: weight validation, program
//! resolution, and the device call sequence of one cycle.  All interaction
//! with devices happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod controller;
pub mod events;
pub mod phase;
pub mod ports;

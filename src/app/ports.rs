//! Port traits: the boundary between the washing controller and the devices.
//!
//! ```text
//!   Device adapter ──▶ Port trait ──▶ WashingController (domain)
//! ```
//!
//! Driven adapters (dirt detector, drum engine, water pump, event sinks)
//! implement these traits.  The [`WashingController`](super::controller::WashingController)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! All port errors are typed; the controller propagates them unchanged.

use crate::error::{DetectorError, EngineError, PumpError};
use crate::laundry::{LaundryBatch, Percentage};

// ───────────────────────────────────────────────────────────────
// Dirt detector (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Measures how soiled a batch is.  Only consulted for `Autodetect`.
pub trait DirtDetector {
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Result<Percentage, DetectorError>;
}

// ───────────────────────────────────────────────────────────────
// Engine (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Drum motor.
pub trait Engine {
    /// Run the wash phase for `minutes`.
    fn run_washing(&mut self, minutes: u32) -> Result<(), EngineError>;

    /// Run the spin phase.
    fn spin(&mut self) -> Result<(), EngineError>;
}

// ───────────────────────────────────────────────────────────────
// Water pump (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Water intake and drain.  `pour` always precedes `release` in a cycle.
pub trait WaterPump {
    fn pour(&mut self, litres: f64) -> Result<(), PumpError>;

    fn release(&mut self) -> Result<(), PumpError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`WashEvent`](super::events::WashEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::WashEvent);
}

// ───────────────────────────────────────────────────────────────
// Borrowed adapters
// ───────────────────────────────────────────────────────────────
//
// Lets a caller lend a device to the controller and keep ownership.

impl<T: DirtDetector + ?Sized> DirtDetector for &mut T {
    fn detect_dirt_degree(&mut self, batch: &LaundryBatch) -> Result<Percentage, DetectorError> {
        (**self).detect_dirt_degree(batch)
    }
}

impl<T: Engine + ?Sized> Engine for &mut T {
    fn run_washing(&mut self, minutes: u32) -> Result<(), EngineError> {
        (**self).run_washing(minutes)
    }

    fn spin(&mut self) -> Result<(), EngineError> {
        (**self).spin()
    }
}

impl<T: WaterPump + ?Sized> WaterPump for &mut T {
    fn pour(&mut self, litres: f64) -> Result<(), PumpError> {
        (**self).pour(litres)
    }

    fn release(&mut self) -> Result<(), PumpError> {
        (**self).release()
    }
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &super::events::WashEvent) {
        (**self).emit(event);
    }
}

//! Outbound controller events.
//!
//! The [`WashingController`](super::controller::WashingController) emits
//! these through the [`EventSink`](super::ports::EventSink) port.  Adapters
//! on the other side decide what to do with them: log, display, record.

use crate::laundry::{ErrorCode, Percentage, Program};

use super::phase::WashPhase;

/// Structured events emitted by the controller during one `start` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WashEvent {
    /// The cycle moved between phases.
    PhaseChanged { from: WashPhase, to: WashPhase },

    /// The batch was refused before any device was touched.
    Rejected { weight_kg: f64, code: ErrorCode },

    /// The program that will run is known.
    /// `dirt` is set only when it came from the detector.
    ProgramResolved {
        requested: Program,
        effective: Program,
        dirt: Option<Percentage>,
    },

    /// Water released, cycle finished.
    Completed { program: Program, spun: bool },
}

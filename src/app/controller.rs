//! Washing controller, the hexagonal core.
//!
//! [`WashingController`] owns the three device ports and the cycle
//! configuration.  It exposes a single operation, [`start`], which
//! validates a batch, resolves the program, and drives the devices in a
//! fixed order.  All I/O flows through port traits, making the whole
//! cycle testable with mock adapters.
//!
//! ```text
//!  DirtDetector ──▶ ┌─────────────────────────┐ ──▶ EventSink
//!                   │    WashingController     │
//!        Engine ◀── │ validate · resolve · run │
//!     WaterPump ◀── └─────────────────────────┘
//! ```
//!
//! Device call order on a successful cycle:
//! `[detect_dirt_degree]` → `pour` → `run_washing` → `[spin]` → `release`.
//!
//! [`start`]: WashingController::start

use log::{debug, error, info, warn};

use crate::adapters::log_sink::LogEventSink;
use crate::config::WasherConfig;
use crate::error::Result;
use crate::laundry::{ErrorCode, LaundryBatch, LaundryStatus, Program, ProgramConfiguration};

use super::events::WashEvent;
use super::phase::WashPhase;
use super::ports::{DirtDetector, Engine, EventSink, WaterPump};

// ───────────────────────────────────────────────────────────────
// WashingController
// ───────────────────────────────────────────────────────────────

pub struct WashingController<D, E, P, S = LogEventSink> {
    detector: D,
    engine: E,
    pump: P,
    sink: S,
    config: WasherConfig,
}

impl<D, E, P> WashingController<D, E, P>
where
    D: DirtDetector,
    E: Engine,
    P: WaterPump,
{
    /// Controller with the default [`WasherConfig`] that reports events
    /// through the `log` facade.
    pub fn new(detector: D, engine: E, pump: P) -> Self {
        Self {
            detector,
            engine,
            pump,
            sink: LogEventSink::new(),
            config: WasherConfig::default(),
        }
    }
}

impl<D, E, P, S> WashingController<D, E, P, S>
where
    D: DirtDetector,
    E: Engine,
    P: WaterPump,
    S: EventSink,
{
    /// Replace the configuration.  Fails without touching `self`'s config
    /// if `config` does not validate.
    pub fn with_config(mut self, config: WasherConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Route events to a different sink.
    pub fn with_sink<S2: EventSink>(self, sink: S2) -> WashingController<D, E, P, S2> {
        WashingController {
            detector: self.detector,
            engine: self.engine,
            pump: self.pump,
            sink,
            config: self.config,
        }
    }

    // ── Cycle ─────────────────────────────────────────────────

    /// Run one wash cycle.
    ///
    /// A batch over the weight limit yields `Ok` with
    /// `Outcome::Failure` / `ErrorCode::TooHeavy` and no device is touched.
    /// `Err` is returned only when a device port fails; the cycle stops at
    /// the failing call and nothing after it runs.
    pub fn start(
        &mut self,
        batch: LaundryBatch,
        program: ProgramConfiguration,
    ) -> Result<LaundryStatus> {
        let mut phase = WashPhase::Validating;

        if batch.weight_kg() > self.config.max_weight_kg {
            warn!(
                "Batch rejected: {:.2} kg exceeds limit of {:.2} kg",
                batch.weight_kg(),
                self.config.max_weight_kg
            );
            self.sink.emit(&WashEvent::Rejected {
                weight_kg: batch.weight_kg(),
                code: ErrorCode::TooHeavy,
            });
            self.advance(&mut phase, WashPhase::Failed);
            return Ok(LaundryStatus::failure(ErrorCode::TooHeavy));
        }

        info!(
            "Batch accepted: {:?} {:.2} kg, program={:?} spin={}",
            batch.material(),
            batch.weight_kg(),
            program.program,
            program.spin
        );

        match self.run_cycle(&mut phase, &batch, program) {
            Ok(ran) => {
                info!("Wash cycle completed: {:?}", ran);
                Ok(LaundryStatus::success(ran))
            }
            Err(e) => {
                error!("Wash cycle aborted in {}: {}", phase.name(), e);
                Err(e)
            }
        }
    }

    fn run_cycle(
        &mut self,
        phase: &mut WashPhase,
        batch: &LaundryBatch,
        selection: ProgramConfiguration,
    ) -> Result<Program> {
        self.advance(phase, WashPhase::ResolvingProgram);
        let program = self.resolve_program(batch, selection.program)?;
        let minutes = self.config.minutes_for(program).unwrap_or_else(|| {
            debug_assert!(false, "unresolved program reached the drum: {program:?}");
            self.config.medium_minutes
        });

        self.advance(phase, WashPhase::Running);

        let litres = self.config.litres_for(batch.weight_kg());
        debug!("Pouring {:.1} L", litres);
        self.pump.pour(litres)?;

        debug!("Washing {:?} for {} min", program, minutes);
        self.engine.run_washing(minutes)?;

        let spun = selection.spin && batch.material().allows_spin();
        if spun {
            debug!("Spinning");
            self.engine.spin()?;
        } else if selection.spin {
            debug!("Spin suppressed for {:?}", batch.material());
        }

        debug!("Releasing water");
        self.pump.release()?;

        self.advance(phase, WashPhase::Completed);
        self.sink.emit(&WashEvent::Completed { program, spun });
        Ok(program)
    }

    /// Fixed programs pass through; `Autodetect` asks the detector once.
    fn resolve_program(&mut self, batch: &LaundryBatch, requested: Program) -> Result<Program> {
        let (effective, dirt) = if requested.is_autodetect() {
            let dirt = self.detector.detect_dirt_degree(batch)?;
            let effective = Program::for_dirt_degree(dirt, self.config.dirt_threshold_percent);
            debug!("Dirt degree {} -> {:?}", dirt, effective);
            (effective, Some(dirt))
        } else {
            (requested, None)
        };

        self.sink.emit(&WashEvent::ProgramResolved {
            requested,
            effective,
            dirt,
        });
        Ok(effective)
    }

    fn advance(&mut self, phase: &mut WashPhase, next: WashPhase) {
        debug_assert!(
            phase.can_enter(next),
            "illegal phase transition {phase:?} -> {next:?}"
        );
        let from = *phase;
        *phase = next;
        self.sink.emit(&WashEvent::PhaseChanged { from, to: next });
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &WasherConfig {
        &self.config
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn pump(&self) -> &P {
        &self.pump
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Hand the devices and the sink back to the caller.
    pub fn into_parts(self) -> (D, E, P, S) {
        (self.detector, self.engine, self.pump, self.sink)
    }
}

//! Mock device adapters for integration tests.
//!
//! All three mocks write into one shared [`Journal`] so tests can assert on
//! call counts *and* on the order of calls across devices.  A mock records
//! the call before it decides whether to fail, the way a real device would
//! have received the command.

use std::cell::RefCell;
use std::rc::Rc;

use washctl::app::events::WashEvent;
use washctl::app::ports::{DirtDetector, Engine, EventSink, WaterPump};
use washctl::error::{DetectorError, EngineError, PumpError};
use washctl::{LaundryBatch, Percentage, WashingController};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    DetectDirt,
    Pour { litres: f64 },
    RunWashing { minutes: u32 },
    Spin,
    Release,
}

#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<DeviceCall>>>);

#[allow(dead_code)]
impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: DeviceCall) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<DeviceCall> {
        self.0.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn count(&self, pred: impl Fn(&DeviceCall) -> bool) -> usize {
        self.0.borrow().iter().filter(|&c| pred(c)).count()
    }

    pub fn position(&self, pred: impl Fn(&DeviceCall) -> bool) -> Option<usize> {
        self.0.borrow().iter().position(pred)
    }

    pub fn detects(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::DetectDirt))
    }

    pub fn pours(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::Pour { .. }))
    }

    pub fn washes(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::RunWashing { .. }))
    }

    pub fn spins(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::Spin))
    }

    pub fn releases(&self) -> usize {
        self.count(|c| matches!(c, DeviceCall::Release))
    }
}

// ── MockDetector ──────────────────────────────────────────────

pub struct MockDetector {
    journal: Journal,
    reading: Percentage,
    fault: Option<DetectorError>,
}

#[allow(dead_code)]
impl MockDetector {
    pub fn new(journal: &Journal, reading: u8) -> Self {
        Self {
            journal: journal.clone(),
            reading: Percentage::new(reading).expect("test reading within 0..=100"),
            fault: None,
        }
    }

    pub fn failing(mut self, fault: DetectorError) -> Self {
        self.fault = Some(fault);
        self
    }
}

impl DirtDetector for MockDetector {
    fn detect_dirt_degree(&mut self, _batch: &LaundryBatch) -> Result<Percentage, DetectorError> {
        self.journal.record(DeviceCall::DetectDirt);
        match self.fault {
            Some(e) => Err(e),
            None => Ok(self.reading),
        }
    }
}

// ── MockEngine ────────────────────────────────────────────────

pub struct MockEngine {
    journal: Journal,
    wash_fault: Option<EngineError>,
    spin_fault: Option<EngineError>,
}

#[allow(dead_code)]
impl MockEngine {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            wash_fault: None,
            spin_fault: None,
        }
    }

    pub fn failing_wash(mut self, fault: EngineError) -> Self {
        self.wash_fault = Some(fault);
        self
    }

    pub fn failing_spin(mut self, fault: EngineError) -> Self {
        self.spin_fault = Some(fault);
        self
    }
}

impl Engine for MockEngine {
    fn run_washing(&mut self, minutes: u32) -> Result<(), EngineError> {
        self.journal.record(DeviceCall::RunWashing { minutes });
        self.wash_fault.map_or(Ok(()), Err)
    }

    fn spin(&mut self) -> Result<(), EngineError> {
        self.journal.record(DeviceCall::Spin);
        self.spin_fault.map_or(Ok(()), Err)
    }
}

// ── MockPump ──────────────────────────────────────────────────

pub struct MockPump {
    journal: Journal,
    pour_fault: Option<PumpError>,
    release_fault: Option<PumpError>,
}

#[allow(dead_code)]
impl MockPump {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            pour_fault: None,
            release_fault: None,
        }
    }

    pub fn failing_pour(mut self, fault: PumpError) -> Self {
        self.pour_fault = Some(fault);
        self
    }

    pub fn failing_release(mut self, fault: PumpError) -> Self {
        self.release_fault = Some(fault);
        self
    }
}

impl WaterPump for MockPump {
    fn pour(&mut self, litres: f64) -> Result<(), PumpError> {
        self.journal.record(DeviceCall::Pour { litres });
        self.pour_fault.map_or(Ok(()), Err)
    }

    fn release(&mut self) -> Result<(), PumpError> {
        self.journal.record(DeviceCall::Release);
        self.release_fault.map_or(Ok(()), Err)
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<WashEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &WashEvent) {
        self.events.push(*event);
    }
}

// ── Rig ───────────────────────────────────────────────────────

pub type Rig = WashingController<MockDetector, MockEngine, MockPump, RecordingSink>;

#[allow(dead_code)]
pub fn assemble(detector: MockDetector, engine: MockEngine, pump: MockPump) -> Rig {
    WashingController::new(detector, engine, pump).with_sink(RecordingSink::default())
}

/// Controller wired to well-behaved mocks whose detector reports `dirt`.
#[allow(dead_code)]
pub fn rig(dirt: u8) -> (Rig, Journal) {
    let journal = Journal::new();
    let ctl = assemble(
        MockDetector::new(&journal, dirt),
        MockEngine::new(&journal),
        MockPump::new(&journal),
    );
    (ctl, journal)
}

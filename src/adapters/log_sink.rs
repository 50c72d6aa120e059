//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured wash events to the `log`
//! facade.  Whatever logger the host application installs decides where
//! they end up.

use log::{info, warn};

use crate::app::events::WashEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`WashEvent`] as a single line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &WashEvent) {
        match event {
            WashEvent::PhaseChanged { from, to } => {
                info!("PHASE | {} -> {}", from.name(), to.name());
            }
            WashEvent::Rejected { weight_kg, code } => {
                warn!("REJECT | weight={:.2}kg | code={:?}", weight_kg, code);
            }
            WashEvent::ProgramResolved {
                requested,
                effective,
                dirt,
            } => match dirt {
                Some(d) => info!(
                    "PROGRAM | requested={:?} effective={:?} | dirt={}",
                    requested, effective, d
                ),
                None => info!("PROGRAM | requested={:?} effective={:?}", requested, effective),
            },
            WashEvent::Completed { program, spun } => {
                info!(
                    "DONE | program={:?} | spin={}",
                    program,
                    if *spun { "yes" } else { "no" }
                );
            }
        }
    }
}

//! Phases of a single wash cycle.
//!
//! ```text
//!  Validating ──▶ ResolvingProgram ──▶ Running ──▶ Completed
//!      │
//!      └────────▶ Failed
//! ```
//!
//! The phase lives only for the duration of one
//! [`start`](super::controller::WashingController::start) call; the
//! controller keeps no phase between calls.

/// Where a wash cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WashPhase {
    /// Checking the batch against the weight limit.
    Validating,
    /// Picking the program, consulting the dirt detector for `Autodetect`.
    ResolvingProgram,
    /// Pour, wash, optional spin.
    Running,
    /// Water released.  Terminal.
    Completed,
    /// Batch rejected.  Terminal.
    Failed,
}

impl WashPhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Whether `next` is a legal successor of `self`.
    pub const fn can_enter(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Validating, Self::ResolvingProgram | Self::Failed)
                | (Self::ResolvingProgram, Self::Running)
                | (Self::Running, Self::Completed)
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Validating => "VALIDATING",
            Self::ResolvingProgram => "RESOLVING_PROGRAM",
            Self::Running => "RUNNING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }
}

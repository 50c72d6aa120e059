//! Laundry value objects.
//!
//! Everything the caller hands to
//! [`WashingController::start`](crate::app::controller::WashingController::start)
//! and everything it gets back.  All types are `Copy`, have no identity
//! beyond their fields, and validate at construction.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

// ---------------------------------------------------------------------------
// Material
// ---------------------------------------------------------------------------

/// Fabric type of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Material {
    #[default]
    Cotton,
    Delicate,
    Jeans,
    Synthetic,
    Wool,
}

impl Material {
    /// Whether the drum may spin this material.  Delicate loads never spin,
    /// whatever the program configuration asks for.
    pub const fn allows_spin(self) -> bool {
        !matches!(self, Self::Delicate)
    }
}

// ---------------------------------------------------------------------------
// LaundryBatch
// ---------------------------------------------------------------------------

/// One load of laundry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBatch")]
pub struct LaundryBatch {
    material: Material,
    weight_kg: f64,
}

impl LaundryBatch {
    /// Build a batch.  The weight must be finite and strictly positive;
    /// there is no upper bound here, the controller owns the weight policy.
    pub fn new(material: Material, weight_kg: f64) -> Result<Self, InputError> {
        if !weight_kg.is_finite() {
            return Err(InputError::WeightNotFinite);
        }
        if weight_kg <= 0.0 {
            return Err(InputError::WeightNotPositive);
        }
        Ok(Self {
            material,
            weight_kg,
        })
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

#[derive(Deserialize)]
struct RawBatch {
    material: Material,
    weight_kg: f64,
}

impl TryFrom<RawBatch> for LaundryBatch {
    type Error = InputError;

    fn try_from(raw: RawBatch) -> Result<Self, Self::Error> {
        Self::new(raw.material, raw.weight_kg)
    }
}

// ---------------------------------------------------------------------------
// Program / ProgramConfiguration
// ---------------------------------------------------------------------------

/// Wash cycle.  `Autodetect` asks the controller to pick `Medium` or
/// `Long` from a dirt reading; it is never the program that runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Program {
    Short,
    Medium,
    Long,
    Autodetect,
}

impl Program {
    pub const fn is_autodetect(self) -> bool {
        matches!(self, Self::Autodetect)
    }

    /// Map a dirt reading onto a concrete program: at or below
    /// `threshold` → `Medium`, above → `Long`.
    pub fn for_dirt_degree(dirt: Percentage, threshold: u8) -> Self {
        if dirt.value() > threshold {
            Self::Long
        } else {
            Self::Medium
        }
    }
}

/// What the user selected on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramConfiguration {
    pub program: Program,
    pub spin: bool,
}

impl ProgramConfiguration {
    pub const fn new(program: Program, spin: bool) -> Self {
        Self { program, spin }
    }
}

// ---------------------------------------------------------------------------
// Percentage
// ---------------------------------------------------------------------------

/// Integer percentage, 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    pub fn new(value: u8) -> Result<Self, InputError> {
        if value > 100 {
            return Err(InputError::PercentageOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percentage {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl core::fmt::Display for Percentage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ---------------------------------------------------------------------------
// LaundryStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Success,
    Failure,
}

/// Reason for a `Failure` outcome.  `NoError` on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NoError,
    TooHeavy,
}

/// Result of one wash attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaundryStatus {
    result: Outcome,
    error_code: ErrorCode,
    runned_program: Option<Program>,
}

impl LaundryStatus {
    pub(crate) const fn success(program: Program) -> Self {
        Self {
            result: Outcome::Success,
            error_code: ErrorCode::NoError,
            runned_program: Some(program),
        }
    }

    pub(crate) const fn failure(code: ErrorCode) -> Self {
        Self {
            result: Outcome::Failure,
            error_code: code,
            runned_program: None,
        }
    }

    pub fn result(&self) -> Outcome {
        self.result
    }

    pub fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    /// Program that actually ran.  `None` unless the outcome is `Success`.
    pub fn runned_program(&self) -> Option<Program> {
        self.runned_program
    }

    pub fn is_success(&self) -> bool {
        self.result == Outcome::Success
    }
}

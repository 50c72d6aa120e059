//! Unified error types for the washing controller.
//!
//! A single `Error` enum that every subsystem converts into, so the
//! controller can propagate any device fault with `?`.  All variants are
//! `Copy` and carry no heap data.
//!
//! A batch that is too heavy is **not** an error: it is a regular
//! [`LaundryStatus`](crate::laundry::LaundryStatus) with
//! `ErrorCode::TooHeavy`.  `Error` is reserved for malformed input,
//! invalid configuration, and faults reported by a device port.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A value object was constructed from invalid data.
    Input(InputError),
    /// Controller configuration failed validation.
    Config(ConfigError),
    /// The dirt detector could not produce a reading.
    Detector(DetectorError),
    /// The engine rejected or failed a command.
    Engine(EngineError),
    /// The water pump rejected or failed a command.
    Pump(PumpError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Detector(e) => write!(f, "dirt detector: {e}"),
            Self::Engine(e) => write!(f, "engine: {e}"),
            Self::Pump(e) => write!(f, "water pump: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Batch weight is zero or negative.
    WeightNotPositive,
    /// Batch weight is NaN or infinite.
    WeightNotFinite,
    /// Percentage above 100.
    PercentageOutOfRange(u8),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightNotPositive => write!(f, "batch weight must be positive"),
            Self::WeightNotFinite => write!(f, "batch weight must be finite"),
            Self::PercentageOutOfRange(v) => write!(f, "percentage {v} is above 100"),
        }
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The config document could not be parsed.
    Malformed,
    /// A config field failed range validation.
    /// The `&'static str` names the field and the rule.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed config document"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Device errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorError {
    /// The optical sensor returned no usable sample.
    SensorUnavailable,
    /// The reading fell outside 0..=100.
    OutOfRange,
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorUnavailable => write!(f, "sensor unavailable"),
            Self::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

impl From<DetectorError> for Error {
    fn from(e: DetectorError) -> Self {
        Self::Detector(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A wash of zero minutes was requested.
    InvalidDuration,
    /// Spin was requested before any washing.
    NotWashed,
    /// The motor stalled or overheated.
    Fault,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration => write!(f, "invalid wash duration"),
            Self::NotWashed => write!(f, "spin requested before washing"),
            Self::Fault => write!(f, "motor fault"),
        }
    }
}

impl From<EngineError> for Error {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpError {
    /// Pour amount was zero, negative, or not finite.
    InvalidAmount,
    /// Pouring would exceed the drum capacity.
    Overflow,
    /// The valve or drain did not respond.
    Fault,
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount => write!(f, "invalid pour amount"),
            Self::Overflow => write!(f, "drum capacity exceeded"),
            Self::Fault => write!(f, "pump fault"),
        }
    }
}

impl From<PumpError> for Error {
    fn from(e: PumpError) -> Self {
        Self::Pump(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

//! Washing machine control library.
//!
//! Decides whether a laundry batch can be washed, resolves the program to
//! run, and drives the dirt detector, engine and water pump through the
//! [`app::ports`] traits.  See [`app::controller::WashingController`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod laundry;

pub use app::controller::WashingController;
pub use config::WasherConfig;
pub use error::{Error, Result};
pub use laundry::{
    ErrorCode, LaundryBatch, LaundryStatus, Material, Outcome, Percentage, Program,
    ProgramConfiguration,
};

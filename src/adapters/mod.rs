//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements | Connects to         |
//! |------------|------------|---------------------|
//! | `log_sink` | EventSink  | `log` facade output |
//!
//! Device ports are implemented by the in-memory [`drivers`](crate::drivers)
//! on host builds.

pub mod log_sink;

//! Error types for signal analysis.
//!
//! This module contains error types, validation violations and the Result alias.

mod signal_error;
mod violation;

pub use signal_error::{Result, SignalError};
pub use violation::{LocSegment, Violation, ViolationKind};

//! Data models for signal analysis.
//!
//! This module contains data structures used throughout the signal analysis system.

mod movement;
mod signal_analysis;
mod trend;

pub use movement::Movement;
pub use signal_analysis::SignalAnalysis;
pub use trend::Trend;

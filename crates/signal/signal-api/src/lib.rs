//! Signal Analysis API
//!
//! Boundary types for signal analysis:
//!
//! - [`SignalRequest`]: a validated, non-empty sequence of integers
//! - [`parse_signal_input`]: comma-separated text input
//! - [`AnalyzerConfig`]: analyzer settings

mod config;
mod request;
mod text;

// Re-export SPI types
pub use signal_spi::{
    LocSegment, Movement, Result, SignalAnalysis, SignalAnalyzer, SignalError, Trend, Violation,
    ViolationKind,
};

pub use config::AnalyzerConfig;
pub use request::{SignalRequest, DATA_FIELD};
pub use text::{format_signal, parse_signal_input};

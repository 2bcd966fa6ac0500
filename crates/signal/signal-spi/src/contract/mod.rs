//! Contract definitions for signal analysis.
//!
//! This module contains trait definitions that analyzers must implement.

mod signal_analyzer;

pub use signal_analyzer::SignalAnalyzer;

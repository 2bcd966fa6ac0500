//! Signal Analysis Facade
//!
//! Unified re-exports for the signal analysis module.
//!
//! This facade provides a single entry point to all signal analysis functionality:
//! - `SignalAnalyzer` trait, `SignalAnalysis`, `Trend` and errors from SPI
//! - `SignalRequest`, text parsing and configuration from API
//! - `MagnitudeTrendAnalyzer` and statistics helpers from Core

// Re-export everything from SPI
pub use signal_spi::*;

// Re-export everything from API
pub use signal_api::*;

// Re-export everything from Core
pub use signal_core::*;

/// Validate and analyze in one step with the default analyzer.
pub fn analyze(data: Vec<i64>) -> Result<SignalAnalysis> {
    SignalRequest::new(data)?.analyze_with(&MagnitudeTrendAnalyzer::new())
}

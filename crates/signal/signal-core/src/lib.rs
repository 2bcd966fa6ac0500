//! Signal Analysis Core
//!
//! Analyzer implementations for signal statistics and trend classification.

mod analyzer;
mod stats;

pub use analyzer::MagnitudeTrendAnalyzer;
pub use stats::{average, extrema};

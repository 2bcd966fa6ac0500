//! Signal Analysis Service Provider Interface
//!
//! Defines the analyzer contract along with the trend, statistics and error
//! types shared by every layer of the signal analysis stack.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SignalAnalyzer;
pub use error::{LocSegment, Result, SignalError, Violation, ViolationKind};
pub use model::{Movement, SignalAnalysis, Trend};

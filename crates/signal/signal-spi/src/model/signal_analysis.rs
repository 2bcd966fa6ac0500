//! Signal analysis result.

use super::Trend;
use serde::{Deserialize, Serialize};

/// Descriptive statistics and trend of a signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalAnalysis {
    /// Arithmetic mean, always a float.
    pub average: f64,
    /// Smallest value.
    pub minimum: i64,
    /// Largest value.
    pub maximum: i64,
    /// Overall direction.
    pub trend: Trend,
}

impl SignalAnalysis {
    pub fn new(average: f64, minimum: i64, maximum: i64, trend: Trend) -> Self {
        Self {
            average,
            minimum,
            maximum,
            trend,
        }
    }

    /// Spread between maximum and minimum.
    pub fn range(&self) -> u64 {
        self.maximum.abs_diff(self.minimum)
    }
}

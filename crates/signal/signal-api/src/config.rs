//! Analyzer configuration.

use serde::{Deserialize, Serialize};

/// Analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Signal analyzed by readiness checks (default: `[1, 3, 2, 5, 4, 6, 7]`).
    pub self_check_sample: Vec<i64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            self_check_sample: vec![1, 3, 2, 5, 4, 6, 7],
        }
    }
}

impl AnalyzerConfig {
    pub fn new(self_check_sample: Vec<i64>) -> Self {
        Self { self_check_sample }
    }
}

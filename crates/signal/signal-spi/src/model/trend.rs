//! Trend classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse direction of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Ascending,
    Descending,
    Stable,
}

impl Trend {
    /// Wire name of the trend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Ascending => "ascending",
            Trend::Descending => "descending",
            Trend::Stable => "stable",
        }
    }

    /// All trend variants.
    pub fn all() -> [Trend; 3] {
        [Trend::Ascending, Trend::Descending, Trend::Stable]
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

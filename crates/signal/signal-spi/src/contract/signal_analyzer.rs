//! Signal analyzer trait definition.

use crate::error::Result;
use crate::model::{SignalAnalysis, Trend};

/// Signal analyzer trait.
///
/// Implementations compute descriptive statistics and a trend classification
/// for an ordered sequence of integers. Callers are expected to validate the
/// sequence (non-empty, integers only) before handing it over; analyzers do
/// not re-validate.
pub trait SignalAnalyzer: Send + Sync {
    /// Compute average, minimum, maximum and trend of `data`.
    ///
    /// Returns [`SignalError::Computation`](crate::SignalError::Computation)
    /// if the arithmetic cannot be carried out, e.g. when an empty slice
    /// slipped past validation.
    fn analyze(&self, data: &[i64]) -> Result<SignalAnalysis>;

    /// Classify the overall direction of `data`.
    fn determine_trend(&self, data: &[i64]) -> Trend;

    /// Short identifier used in logs and health reports.
    fn name(&self) -> &str;
}

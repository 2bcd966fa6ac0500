//! Magnitude-weighted trend analyzer.

use signal_spi::{Movement, Result, SignalAnalysis, SignalAnalyzer, SignalError, Trend};

use crate::stats::{average, extrema};

/// Analyzer that classifies trend by the summed size of rises versus falls.
///
/// A sequence with one large rise and several small dips is ascending:
/// direction is decided by net magnitude of movement, not by how many steps
/// went each way. Equal magnitudes, including no movement at all, are stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagnitudeTrendAnalyzer;

impl MagnitudeTrendAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Accumulated rise and fall magnitudes of `data`.
    pub fn movement(&self, data: &[i64]) -> Movement {
        Movement::from_values(data)
    }
}

impl SignalAnalyzer for MagnitudeTrendAnalyzer {
    fn analyze(&self, data: &[i64]) -> Result<SignalAnalysis> {
        let (average, (minimum, maximum)) = average(data)
            .zip(extrema(data))
            .ok_or_else(|| SignalError::Computation("division by zero".to_string()))?;
        let trend = self.determine_trend(data);

        tracing::debug!(
            analyzer = self.name(),
            len = data.len(),
            average,
            minimum,
            maximum,
            %trend,
            "signal analyzed"
        );

        Ok(SignalAnalysis::new(average, minimum, maximum, trend))
    }

    fn determine_trend(&self, data: &[i64]) -> Trend {
        if data.len() < 2 {
            return Trend::Stable;
        }
        self.movement(data).trend()
    }

    fn name(&self) -> &str {
        "magnitude_trend"
    }
}

//! Magnitude-weighted movement accumulators.

use super::Trend;
use std::cmp::Ordering;

/// Summed magnitude of upward and downward steps in a signal.
///
/// Steps are weighted by size, so one large rise outweighs several small
/// dips. Zero steps contribute to neither side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movement {
    /// Sum of all positive differences.
    pub increasing: u128,
    /// Sum of the absolute values of all negative differences.
    pub decreasing: u128,
}

impl Movement {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate the movement between consecutive values.
    pub fn from_values(values: &[i64]) -> Self {
        values
            .windows(2)
            .fold(Self::new(), |mut movement, pair| {
                movement.record(i128::from(pair[1]) - i128::from(pair[0]));
                movement
            })
    }

    /// Record a single step.
    pub fn record(&mut self, difference: i128) {
        match difference.cmp(&0) {
            Ordering::Greater => self.increasing += difference.unsigned_abs(),
            Ordering::Less => self.decreasing += difference.unsigned_abs(),
            Ordering::Equal => {}
        }
    }

    /// Classify the accumulated movement. Equal magnitudes are stable.
    pub fn trend(&self) -> Trend {
        match self.increasing.cmp(&self.decreasing) {
            Ordering::Greater => Trend::Ascending,
            Ordering::Less => Trend::Descending,
            Ordering::Equal => Trend::Stable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single_have_no_movement() {
        assert_eq!(Movement::from_values(&[]), Movement::new());
        assert_eq!(Movement::from_values(&[7]), Movement::new());
        assert_eq!(Movement::new().trend(), Trend::Stable);
    }

    #[test]
    fn test_constant_values_accumulate_nothing() {
        let movement = Movement::from_values(&[3, 3, 3, 3]);
        assert_eq!(movement.increasing, 0);
        assert_eq!(movement.decreasing, 0);
        assert_eq!(movement.trend(), Trend::Stable);
    }

    #[test]
    fn test_magnitudes_are_summed() {
        let movement = Movement::from_values(&[1, 3, 2, 4]);
        assert_eq!(movement.increasing, 4);
        assert_eq!(movement.decreasing, 1);
        assert_eq!(movement.trend(), Trend::Ascending);

        let movement = Movement::from_values(&[4, 5, 2]);
        assert_eq!(movement.increasing, 1);
        assert_eq!(movement.decreasing, 3);
        assert_eq!(movement.trend(), Trend::Descending);
    }

    #[test]
    fn test_equal_magnitudes_are_stable() {
        let movement = Movement::from_values(&[1, 2, 1]);
        assert_eq!(movement.increasing, movement.decreasing);
        assert_eq!(movement.trend(), Trend::Stable);
    }

    #[test]
    fn test_magnitude_beats_step_count() {
        // one large rise, three small dips
        let movement = Movement::from_values(&[0, 100, 99, 98, 97]);
        assert_eq!(movement.increasing, 100);
        assert_eq!(movement.decreasing, 3);
        assert_eq!(movement.trend(), Trend::Ascending);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let movement = Movement::from_values(&[i64::MIN, i64::MAX, i64::MIN]);
        assert_eq!(movement.increasing, u64::MAX as u128);
        assert_eq!(movement.decreasing, u64::MAX as u128);
        assert_eq!(movement.trend(), Trend::Stable);
    }
}

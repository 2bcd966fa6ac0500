//! Descriptive statistics over integer signals.

/// Arithmetic mean as a float, or `None` for an empty slice.
///
/// Summation happens in `i128`, so any `i64` input of practical length
/// is summed exactly before the single float division.
pub fn average(data: &[i64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: i128 = data.iter().map(|&v| i128::from(v)).sum();
    Some(sum as f64 / data.len() as f64)
}

/// Smallest and largest value, or `None` for an empty slice.
pub fn extrema(data: &[i64]) -> Option<(i64, i64)> {
    let (&first, rest) = data.split_first()?;
    Some(
        rest.iter()
            .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_is_float_for_whole_mean() {
        assert_eq!(average(&[2, 4]), Some(3.0));
        assert_eq!(average(&[1, 2, 3, 4, 5]), Some(3.0));
    }

    #[test]
    fn test_average_fractional() {
        assert_eq!(average(&[1, 2]), Some(1.5));
        assert_eq!(average(&[-1, -2]), Some(-1.5));
    }

    #[test]
    fn test_average_does_not_overflow() {
        assert_eq!(average(&[i64::MAX, i64::MAX]), Some(i64::MAX as f64));
    }

    #[test]
    fn test_empty_has_no_statistics() {
        assert_eq!(average(&[]), None);
        assert_eq!(extrema(&[]), None);
    }

    #[test]
    fn test_extrema() {
        assert_eq!(extrema(&[3, -1, 7, 0]), Some((-1, 7)));
        assert_eq!(extrema(&[42]), Some((42, 42)));
    }
}

//! Unit tests for the signal analysis facade
//!
//! Statistics and trend behaviour of the default analyzer.

use signal_facade::{MagnitudeTrendAnalyzer, SignalAnalyzer, SignalRequest, Trend};

fn analyze(data: &[i64]) -> signal_facade::SignalAnalysis {
    let request = SignalRequest::new(data.to_vec()).unwrap();
    request.analyze_with(&MagnitudeTrendAnalyzer::new()).unwrap()
}

// ============================================================================
// Statistics Tests
// ============================================================================

#[test]
fn test_analyze_ascending_trend() {
    let result = analyze(&[1, 2, 3, 4, 5]);

    assert_eq!(result.average, 3.0);
    assert_eq!(result.minimum, 1);
    assert_eq!(result.maximum, 5);
    assert_eq!(result.trend, Trend::Ascending);
}

#[test]
fn test_analyze_descending_trend() {
    let result = analyze(&[5, 4, 3, 2, 1]);

    assert_eq!(result.average, 3.0);
    assert_eq!(result.minimum, 1);
    assert_eq!(result.maximum, 5);
    assert_eq!(result.trend, Trend::Descending);
}

#[test]
fn test_analyze_stable_trend() {
    let result = analyze(&[3, 3, 3, 3, 3]);

    assert_eq!(result.average, 3.0);
    assert_eq!(result.minimum, 3);
    assert_eq!(result.maximum, 3);
    assert_eq!(result.trend, Trend::Stable);
}

#[test]
fn test_analyze_mixed_trend() {
    let result = analyze(&[1, 5, 2, 4, 3]);

    assert_eq!(result.average, 3.0);
    assert_eq!(result.minimum, 1);
    assert_eq!(result.maximum, 5);
    assert_eq!(result.trend, Trend::Ascending);
}

#[test]
fn test_single_value() {
    let result = analyze(&[42]);

    assert_eq!(result.average, 42.0);
    assert_eq!(result.minimum, 42);
    assert_eq!(result.maximum, 42);
    assert_eq!(result.trend, Trend::Stable);
}

#[test]
fn test_average_uses_float_division() {
    assert_eq!(analyze(&[2, 4]).average, 3.0);
    assert_eq!(analyze(&[1, 2]).average, 1.5);
    assert_eq!(analyze(&[-3, 4]).average, 0.5);
}

#[test]
fn test_bounds_contain_every_element() {
    let samples: [&[i64]; 5] = [
        &[7, -2, 19, 0, 3],
        &[-5, -5, -1],
        &[100],
        &[i64::MIN, 0, i64::MAX],
        &[9, 8, 7, 8, 9, 10, 1],
    ];
    for data in samples {
        let result = analyze(data);
        for &v in data {
            assert!(result.minimum <= v && v <= result.maximum);
        }
    }
}

// ============================================================================
// Trend Tests
// ============================================================================

#[test]
fn test_tie_is_stable() {
    let analyzer = MagnitudeTrendAnalyzer::new();
    assert_eq!(analyzer.determine_trend(&[1, 2, 1]), Trend::Stable);
    assert_eq!(analyzer.determine_trend(&[5, 1, 5]), Trend::Stable);
}

#[test]
fn test_magnitude_outweighs_step_count() {
    let analyzer = MagnitudeTrendAnalyzer::new();

    // three falls of 1, one rise of 10
    assert_eq!(analyzer.determine_trend(&[10, 9, 8, 7, 17]), Trend::Ascending);
    // three rises of 1, one fall of 10
    assert_eq!(analyzer.determine_trend(&[0, 1, 2, 3, -7]), Trend::Descending);
}

#[test]
fn test_constant_sequence_has_no_movement() {
    let analyzer = MagnitudeTrendAnalyzer::new();
    let movement = analyzer.movement(&[8, 8, 8, 8]);

    assert_eq!(movement.increasing, 0);
    assert_eq!(movement.decreasing, 0);
    assert_eq!(analyzer.determine_trend(&[8, 8, 8, 8]), Trend::Stable);
}

//! Signal analysis error types.

use super::Violation;
use thiserror::Error;

/// Errors that can occur while analyzing a signal.
#[derive(Debug, Error)]
pub enum SignalError {
    /// Input was rejected before any computation ran.
    #[error("Validation failed: {}", describe(.0))]
    Validation(Vec<Violation>),

    /// Arithmetic failed inside the analyzer.
    #[error("{0}")]
    Computation(String),
}

impl SignalError {
    /// Returns true for errors raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, SignalError::Validation(_))
    }

    /// Violations carried by a validation error; empty otherwise.
    pub fn violations(&self) -> &[Violation] {
        match self {
            SignalError::Validation(violations) => violations,
            SignalError::Computation(_) => &[],
        }
    }
}

impl From<Violation> for SignalError {
    fn from(violation: Violation) -> Self {
        SignalError::Validation(vec![violation])
    }
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for signal analysis operations.
pub type Result<T> = std::result::Result<T, SignalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_lists_every_violation() {
        let error = SignalError::Validation(vec![
            Violation::not_an_integer("data", 0),
            Violation::fractional("data", 2),
        ]);
        assert_eq!(
            error.to_string(),
            "Validation failed: data.0: Input should be a valid integer; \
             data.2: Input should be a valid integer, got a floating-point number"
        );
    }

    #[test]
    fn test_computation_display_is_bare_message() {
        let error = SignalError::Computation("division by zero".to_string());
        assert_eq!(error.to_string(), "division by zero");
    }

    #[test]
    fn test_from_violation() {
        let error: SignalError = Violation::empty("data").into();
        assert!(error.is_validation());
        assert_eq!(error.violations().len(), 1);
    }

    #[test]
    fn test_computation_has_no_violations() {
        let error = SignalError::Computation("overflow".to_string());
        assert!(!error.is_validation());
        assert!(error.violations().is_empty());
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(SignalError::Computation("x".to_string()));
        assert!(matches!(result.unwrap_err(), SignalError::Computation(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SignalError>();
    }
}

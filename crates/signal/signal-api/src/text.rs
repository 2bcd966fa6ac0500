//! Comma-separated text input.

use crate::request::{SignalRequest, DATA_FIELD};
use signal_spi::{Result, SignalError, Violation, ViolationKind};

/// Parse a comma-separated list of integers such as `"1, 2, 3"`.
///
/// Whitespace around each value is ignored. Blank input, empty values
/// (`"1,,2"`) and anything that is not an integer are rejected.
pub fn parse_signal_input(input: &str) -> Result<SignalRequest> {
    if input.trim().is_empty() {
        return Err(Violation::empty(DATA_FIELD).into());
    }

    let mut values = Vec::new();
    let mut violations = Vec::new();
    for (index, part) in input.split(',').map(str::trim).enumerate() {
        if part.is_empty() {
            violations.push(Violation::new(
                vec![DATA_FIELD.into(), index.into()],
                ViolationKind::Missing,
                "Empty value",
            ));
            continue;
        }
        match part.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) if part.parse::<f64>().is_ok_and(f64::is_finite) => {
                violations.push(Violation::fractional(DATA_FIELD, index))
            }
            Err(_) => violations.push(Violation::new(
                vec![DATA_FIELD.into(), index.into()],
                ViolationKind::IntType,
                format!("Invalid value \"{}\": enter integers separated by commas", part),
            )),
        }
    }

    if !violations.is_empty() {
        return Err(SignalError::Validation(violations));
    }
    SignalRequest::new(values)
}

/// Render values as a comma-separated list.
pub fn format_signal(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

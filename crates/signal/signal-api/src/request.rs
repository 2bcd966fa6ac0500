//! Validated signal requests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use signal_spi::{Result, SignalAnalysis, SignalAnalyzer, SignalError, Violation};

/// Name of the request field holding the signal.
pub const DATA_FIELD: &str = "data";

/// A non-empty ordered sequence of integers.
///
/// Every constructor validates, so holding a `SignalRequest` guarantees the
/// analyzer precondition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct SignalRequest {
    data: Vec<i64>,
}

impl SignalRequest {
    /// Validate an already-typed sequence.
    pub fn new(data: Vec<i64>) -> Result<Self> {
        if data.is_empty() {
            return Err(Violation::empty(DATA_FIELD).into());
        }
        Ok(Self { data })
    }

    /// Validate a JSON body of the form `{"data": [int, ...]}`.
    ///
    /// Strings, floats (including whole floats such as `2.0`), booleans,
    /// nulls and integers outside the `i64` range are rejected. Every
    /// offending element is reported, not just the first.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(Violation::not_an_object)?;
        let data = object
            .get(DATA_FIELD)
            .ok_or_else(|| Violation::missing(DATA_FIELD))?;
        let elements = data
            .as_array()
            .ok_or_else(|| Violation::not_a_list(DATA_FIELD))?;

        let mut values = Vec::with_capacity(elements.len());
        let mut violations = Vec::new();
        for (index, element) in elements.iter().enumerate() {
            match element {
                Value::Number(number) => match number.as_i64() {
                    Some(value) => values.push(value),
                    None if number.is_f64() => {
                        violations.push(Violation::fractional(DATA_FIELD, index))
                    }
                    None => violations.push(Violation::not_an_integer(DATA_FIELD, index)),
                },
                _ => violations.push(Violation::not_an_integer(DATA_FIELD, index)),
            }
        }

        if !violations.is_empty() {
            return Err(SignalError::Validation(violations));
        }
        Self::new(values)
    }

    /// Parse and validate a raw JSON document.
    pub fn from_json_str(body: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| SignalError::from(Violation::invalid_json(e)))?;
        Self::from_value(&value)
    }

    pub fn data(&self) -> &[i64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a validated request.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.data
    }

    /// Run `analyzer` over the validated data.
    pub fn analyze_with<A: SignalAnalyzer + ?Sized>(&self, analyzer: &A) -> Result<SignalAnalysis> {
        analyzer.analyze(&self.data)
    }
}

impl TryFrom<Value> for SignalRequest {
    type Error = SignalError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

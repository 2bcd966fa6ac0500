//! Validation violations reported at the input boundary.

use serde::Serialize;
use std::fmt;

/// One step in the path to an offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocSegment {
    Field(String),
    Index(usize),
}

impl From<&str> for LocSegment {
    fn from(field: &str) -> Self {
        LocSegment::Field(field.to_string())
    }
}

impl From<usize> for LocSegment {
    fn from(index: usize) -> Self {
        LocSegment::Index(index)
    }
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocSegment::Field(name) => f.write_str(name),
            LocSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Constraint that an input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field is absent.
    Missing,
    /// Array has no elements.
    TooShort,
    /// Value is not an array.
    ListType,
    /// Element is not an integer.
    IntType,
    /// Element is a floating-point number.
    IntFromFloat,
    /// Body is not an object.
    ModelType,
    /// Body is not valid JSON.
    JsonInvalid,
}

/// A single violated input constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Path to the offending value, outermost first.
    pub loc: Vec<LocSegment>,
    /// Human-readable description.
    pub msg: String,
    /// Machine-readable constraint code.
    #[serde(rename = "type")]
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(loc: Vec<LocSegment>, kind: ViolationKind, msg: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind,
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(vec![field.into()], ViolationKind::Missing, "Field required")
    }

    pub fn empty(field: &str) -> Self {
        Self::new(
            vec![field.into()],
            ViolationKind::TooShort,
            "Data array cannot be empty",
        )
    }

    pub fn not_a_list(field: &str) -> Self {
        Self::new(
            vec![field.into()],
            ViolationKind::ListType,
            "Input should be a valid list",
        )
    }

    pub fn not_an_integer(field: &str, index: usize) -> Self {
        Self::new(
            vec![field.into(), index.into()],
            ViolationKind::IntType,
            "Input should be a valid integer",
        )
    }

    pub fn fractional(field: &str, index: usize) -> Self {
        Self::new(
            vec![field.into(), index.into()],
            ViolationKind::IntFromFloat,
            "Input should be a valid integer, got a floating-point number",
        )
    }

    pub fn not_an_object() -> Self {
        Self::new(
            Vec::new(),
            ViolationKind::ModelType,
            "Input should be a valid dictionary or object",
        )
    }

    pub fn invalid_json(detail: impl fmt::Display) -> Self {
        Self::new(
            Vec::new(),
            ViolationKind::JsonInvalid,
            format!("JSON decode error: {}", detail),
        )
    }

    /// Prefix the location with an outer segment, e.g. `"body"`.
    pub fn within(mut self, segment: impl Into<LocSegment>) -> Self {
        self.loc.insert(0, segment.into());
        self
    }

    /// Dotted rendering of the location.
    pub fn path(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.loc.is_empty() {
            f.write_str(&self.msg)
        } else {
            write!(f, "{}: {}", self.path(), self.msg)
        }
    }
}

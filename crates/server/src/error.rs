//! API error mapping

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use signal_facade::{SignalError, Violation};

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// Request body violated the input contract (422).
    Validation(Vec<Violation>),
    /// Analysis failed after validation (400).
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<SignalError> for ApiError {
    fn from(error: SignalError) -> Self {
        match error {
            SignalError::Validation(violations) => ApiError::Validation(
                violations
                    .into_iter()
                    .map(|violation| violation.within("body"))
                    .collect(),
            ),
            SignalError::Computation(message) => ApiError::BadRequest(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![
            Violation::invalid_json(rejection.body_text()).within("body")
        ])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(violations) => {
                tracing::debug!(count = violations.len(), "request rejected by validation");
                json!({ "detail": violations })
            }
            ApiError::BadRequest(message) => {
                tracing::warn!(%message, "analysis failed");
                json!({ "detail": message })
            }
        };
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Validation(violations) => {
                write!(f, "API Error {}: {} violation(s)", self.status().as_u16(), violations.len())
            }
            ApiError::BadRequest(message) => {
                write!(f, "API Error {}: {}", self.status().as_u16(), message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

//! API route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use signal_facade::{SignalAnalysis, SignalRequest};

use crate::{ApiError, AppState, ANALYZE_PATH};

/// Analyze a signal and return its statistics and trend.
///
/// Body: `{"data": [int, ...]}`. Invalid bodies are answered with 422 and one
/// `detail` entry per violated constraint; failures inside the analysis are
/// answered with 400.
pub async fn analyze_signal(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SignalAnalysis>, ApiError> {
    let Json(body) = payload?;
    let request = SignalRequest::from_value(&body)?;
    let analysis = request.analyze_with(state.analyzer.as_ref())?;

    tracing::info!(len = request.len(), trend = %analysis.trend, "signal analyzed");

    Ok(Json(analysis))
}

/// Service description.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Signal Analysis API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "analyze_signal": ANALYZE_PATH,
            "health": "/health",
            "liveness": "/health/live",
            "readiness": "/health/ready"
        }
    }))
}

/// Legacy health endpoint
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<Value> {
    Json(json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[derive(Debug, Serialize)]
struct CheckReport {
    name: String,
    status: &'static str,
    message: Option<String>,
}

/// Readiness probe - can the analyzer serve requests?
///
/// Runs the configured self-check sample through the analyzer.
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let check = match state.analyzer.analyze(&state.config.self_check_sample) {
        Ok(analysis) => CheckReport {
            name: state.analyzer.name().to_string(),
            status: "healthy",
            message: Some(format!("sample trend {}", analysis.trend)),
        },
        Err(error) => {
            tracing::warn!(%error, "readiness self-check failed");
            CheckReport {
                name: state.analyzer.name().to_string(),
                status: "unhealthy",
                message: Some(error.to_string()),
            }
        }
    };

    let ready = check.status == "healthy";
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if ready { "ready" } else { "degraded" },
            "version": env!("CARGO_PKG_VERSION"),
            "checks": [check]
        })),
    )
}

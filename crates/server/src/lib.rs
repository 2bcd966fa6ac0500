//! # signal-server
//!
//! REST API for signal analysis: statistics and magnitude-weighted trend of
//! an integer signal, plus health probes.

use axum::{
    routing::{get, post},
    Router,
};
use signal_facade::{AnalyzerConfig, MagnitudeTrendAnalyzer, SignalAnalyzer};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

/// Path of the analysis endpoint.
pub const ANALYZE_PATH: &str = "/analyze_signal/analisar_sinal";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn SignalAnalyzer>,
    pub config: Arc<AnalyzerConfig>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn SignalAnalyzer>, config: AnalyzerConfig) -> Self {
        Self {
            analyzer,
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(MagnitudeTrendAnalyzer::new()), AnalyzerConfig::default())
    }
}

/// Build the router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        // Health endpoints (Kubernetes-compatible)
        .route("/health", get(routes::health))
        .route("/health/live", get(routes::liveness))
        .route("/health/ready", get(routes::readiness))
        // API endpoints
        .route(ANALYZE_PATH, post(routes::analyze_signal))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

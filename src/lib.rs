//! # Pulse - Service Health & Readiness Reporting
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the health endpoints
//! - [`models`] - Shared state and environment-derived configuration
//! - [`services`] - Dependency probes and system metrics collection
//! - [`utils`] - Utility functions and constants

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tracing::info;

use crate::handlers::{health, liveness, readiness, service_info};
use crate::models::AppState;

/// Creates an Axum router exposing the health surface of a service.
///
/// # Routes
///
/// - `GET /` - Service metadata
/// - `GET /health` - Composite health status (200 when ready, 503 while starting)
/// - `GET /health/live` - Liveness probe, always 200
/// - `GET /health/ready` - Readiness probe with per-dependency breakdown
///
/// # Arguments
///
/// * `state` - Shared [`AppState`] holding the service configuration and
///   readiness flag, constructed once at process start
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .with_state(state)
}

/// Runs the one-time startup sequence: pause for the configured delay, then
/// mark the service ready.
///
/// The readiness flag is monotonic. Once set it is never cleared again within
/// the process lifetime, so dependency outages after startup do not roll the
/// service back to `starting`. If this sequence never runs, the service
/// reports `starting` forever and external callers are expected to time out.
///
/// The delay stands in for real initialization work and is configurable via
/// `STARTUP_DELAY_MS` so tests can collapse it to zero.
pub async fn run_startup_sequence(state: Arc<AppState>) {
    let delay = state.config.service.startup_delay;
    info!(
        service = %state.config.service.name,
        delay_ms = delay.as_millis() as u64,
        "Running startup sequence"
    );

    tokio::time::sleep(delay).await;
    state.set_ready();

    info!(service = %state.config.service.name, "Startup complete, service ready");
}

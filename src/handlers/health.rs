//! # Health Endpoints
//!
//! The four endpoints exposed per service instance:
//!
//! - `GET /` - Service metadata
//! - `GET /health` - Composite health, 200 once startup completed, 503 before
//! - `GET /health/live` - Liveness: the process answers, nothing else is checked
//! - `GET /health/ready` - Readiness: startup state plus one fresh probe per
//!   dependency
//!
//! No handler here ever fails. Dependency errors are folded into booleans in
//! the response body, and the only signal coupled to internal state is the
//! 200/503 status code.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::models::AppState;
use crate::services::metrics::{SystemMetrics, system_metrics};
use crate::services::probes::{check_broker, check_cache, check_database};

/// Response for the service metadata root.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub service: String,
    pub version: String,
    pub health_endpoint: String,
    pub liveness_endpoint: String,
    pub readiness_endpoint: String,
}

/// Response for the composite health endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
    pub uptime_seconds: f64,
    pub metrics: SystemMetrics,
    pub details: HealthDetails,
}

/// Runtime details nested in [`HealthResponse`].
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthDetails {
    pub ready: bool,
    pub port: u16,
    pub environment: String,
}

/// Response for the liveness probe.
#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Response for the readiness probe.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub service: String,
    pub checks: ReadinessChecks,
    pub timestamp: String,
}

/// Per-dependency breakdown carried in [`ReadinessResponse`].
///
/// `service` is the startup state; the rest are fresh connectivity probes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub service: bool,
    pub database: bool,
    pub cache: bool,
    pub broker: bool,
}

/// Returns service metadata and where to find the probe endpoints.
///
/// GET /
pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: state.config.service.name.clone(),
        version: state.config.service.version.clone(),
        health_endpoint: "/health".to_string(),
        liveness_endpoint: "/health/live".to_string(),
        readiness_endpoint: "/health/ready".to_string(),
    })
}

/// Reports the composite health of the service.
///
/// GET /health
///
/// # Returns
///
/// - `200 OK` with `status: "healthy"` once the startup sequence completed
/// - `503 Service Unavailable` with `status: "starting"` before that
///
/// The body additionally carries uptime and a point-in-time system resource
/// snapshot. Readiness is monotonic, so after the first 200 this endpoint
/// never flaps back to 503 within one process lifetime.
#[instrument(skip_all)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let ready = state.is_ready();
    debug!(ready, "Processing health request");

    let body = HealthResponse {
        status: if ready { "healthy" } else { "starting" }.to_string(),
        service: state.config.service.name.clone(),
        version: state.config.service.version.clone(),
        timestamp: rfc3339_now(),
        uptime_seconds: state.uptime_seconds(),
        metrics: system_metrics().await,
        details: HealthDetails {
            ready,
            port: state.config.service.port,
            environment: state.config.service.environment.clone(),
        },
    };

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(body))
}

/// Reports that the process exists and answers requests.
///
/// GET /health/live
///
/// Always returns `200 OK`. Performs no I/O and consults no state beyond the
/// service name, so it distinguishes "scheduled and running" from "ready to
/// serve" for orchestrator liveness probes.
pub async fn liveness(State(state): State<Arc<AppState>>) -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "alive".to_string(),
        service: state.config.service.name.clone(),
        timestamp: rfc3339_now(),
    })
}

/// Reports whether the service is safe to receive traffic.
///
/// GET /health/ready
///
/// Runs one fresh probe per dependency. The probes are independent, so they
/// run concurrently and a failure of one never short-circuits the others.
///
/// # Returns
///
/// - `200 OK` with `ready: true` iff the startup state and every dependency
///   check are all true
/// - `503 Service Unavailable` with `ready: false` and the per-dependency
///   breakdown otherwise
#[instrument(skip_all)]
pub async fn readiness(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (database, cache, broker) = tokio::join!(
        check_database(&state.config.database),
        check_cache(&state.config.cache),
        check_broker(&state.config.broker),
    );

    let checks = ReadinessChecks {
        service: state.is_ready(),
        database,
        cache,
        broker,
    };
    let ready = checks.service && checks.database && checks.cache && checks.broker;

    if !ready {
        debug!(?checks, "Readiness degraded");
    }

    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            ready,
            service: state.config.service.name.clone(),
            checks,
            timestamp: rfc3339_now(),
        }),
    )
}

/// Current UTC time as an RFC 3339 string.
fn rfc3339_now() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .expect("current UTC time should format as RFC 3339")
}

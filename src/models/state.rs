use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{debug, info};

use crate::models::HealthConfig;

/// Application state shared across requests. Needs to be thread-safe.
///
/// The readiness flag is the only mutable field and it is written exactly
/// once, by the startup sequence, before traffic is normally routed to the
/// service. Every request handler reads it without locking; a request racing
/// the startup write simply observes `starting`.
pub struct AppState {
    /// Immutable service and dependency configuration.
    pub config: HealthConfig,
    /// Monotonic clock reading taken at construction, for uptime reporting.
    started_at: Instant,
    /// Whether the startup sequence has completed. Never reset.
    ready: AtomicBool,
}

impl AppState {
    /// Creates the state for one service process, initially not ready.
    pub fn new(config: HealthConfig) -> Self {
        info!(service = %config.service.name, "Initializing health state");

        Self {
            config,
            started_at: Instant::now(),
            ready: AtomicBool::new(false),
        }
    }

    /// Marks the service ready. The transition is one-way.
    pub fn set_ready(&self) {
        self.ready.store(true, Ordering::SeqCst);
        debug!("Readiness flag set");
    }

    /// Whether the startup sequence has completed.
    ///
    /// Reflects "initialization finished", not "currently healthy" - a
    /// dependency outage after startup does not clear this flag.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Seconds elapsed since the state was constructed.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}

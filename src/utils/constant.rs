//! # Application Constants
//!
//! Timeouts and defaults used throughout the health surface.

use std::time::Duration;

/// Upper bound on a single dependency probe
///
/// A probe that has not answered within this window is reported as failed for
/// that request. Keeps a slow dependency from stalling the readiness endpoint
/// past the polling interval of typical orchestrators.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Default pause performed by the startup sequence
///
/// Stands in for real initialization work. Overridable per process via the
/// `STARTUP_DELAY_MS` environment variable.
pub const DEFAULT_STARTUP_DELAY: Duration = Duration::from_millis(2000);

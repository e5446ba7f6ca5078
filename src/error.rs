//! # Centralized Error Handling
//!
//! Unified error type for dependency probes. Probe errors are never surfaced
//! through the HTTP layer; the readiness handler converts them to a boolean
//! `false` for the affected dependency after logging.

use thiserror::Error;

/// Everything that can go wrong while probing a single dependency.
///
/// Each variant wraps the underlying client error so the failure reason is
/// preserved for logging, even though callers only ever see a boolean.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("broker error: {0}")]
    Broker(#[from] lapin::Error),

    #[error("probe timed out")]
    Timeout(#[from] tokio::time::error::Elapsed),
}

/// Convenience Result type alias used by the probe internals.
pub type ProbeResult<T> = Result<T, ProbeError>;

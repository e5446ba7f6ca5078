//! # Dependency Probes
//!
//! Minimal round-trip checks against PostgreSQL, Redis and RabbitMQ, used by
//! the readiness endpoint to confirm reachability (not functional
//! correctness).
//!
//! Every probe opens a fresh connection, performs a no-op command and closes
//! the connection again. Nothing is pooled or cached between requests, so a
//! probe result always reflects the dependency's state at the time of the
//! call. Failures of any kind, including timeouts, are logged and reported as
//! `false`; they never propagate to the HTTP layer.

use lapin::{Connection, ConnectionProperties};
use sqlx::Connection as _;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use tokio::time::{error::Elapsed, timeout};
use tracing::warn;

use crate::error::{ProbeError, ProbeResult};
use crate::models::{BrokerConfig, CacheConfig, DatabaseConfig};
use crate::utils::constant::PROBE_TIMEOUT;

/// Probes the PostgreSQL event store with a trivial query.
pub async fn check_database(config: &DatabaseConfig) -> bool {
    report("database", timeout(PROBE_TIMEOUT, ping_database(config)).await)
}

/// Probes Redis with a `PING`.
pub async fn check_cache(config: &CacheConfig) -> bool {
    report("cache", timeout(PROBE_TIMEOUT, ping_cache(config)).await)
}

/// Probes RabbitMQ by opening a connection and a channel.
pub async fn check_broker(config: &BrokerConfig) -> bool {
    report("broker", timeout(PROBE_TIMEOUT, ping_broker(config)).await)
}

/// Collapses a timed probe outcome into the boolean the readiness response
/// carries, logging the reason on failure.
fn report(dependency: &'static str, outcome: Result<ProbeResult<()>, Elapsed>) -> bool {
    match outcome.map_err(ProbeError::from).and_then(|inner| inner) {
        Ok(()) => true,
        Err(e) => {
            warn!(dependency, error = %e, "Dependency probe failed");
            false
        }
    }
}

async fn ping_database(config: &DatabaseConfig) -> ProbeResult<()> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password);

    let mut conn = PgConnection::connect_with(&options).await?;
    sqlx::query("SELECT 1").execute(&mut conn).await?;
    conn.close().await?;

    Ok(())
}

async fn ping_cache(config: &CacheConfig) -> ProbeResult<()> {
    let client = redis::Client::open(config.url())?;
    let mut conn = client.get_multiplexed_async_connection().await?;
    redis::cmd("PING").query_async::<String>(&mut conn).await?;

    Ok(())
}

async fn ping_broker(config: &BrokerConfig) -> ProbeResult<()> {
    let connection =
        Connection::connect(&config.amqp_uri(), ConnectionProperties::default()).await?;

    // A usable broker must hand out channels, not just accept the TCP dial.
    let _channel = connection.create_channel().await?;
    connection.close(200, "health probe complete").await?;

    Ok(())
}

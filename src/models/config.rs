//! # Service Configuration
//!
//! Connection parameters and service identity, read from the environment once
//! at process start and immutable afterwards. Every variable has a default
//! suitable for a local same-host deployment; the only validation performed is
//! numeric coercion, and an unparsable number is fatal at startup.

use std::env;
use std::time::Duration;

use crate::utils::constant::DEFAULT_STARTUP_DELAY;

/// Identity and listen settings of the service being reported on.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub name: String,
    pub version: String,
    pub port: u16,
    pub environment: String,
    pub startup_delay: Duration,
}

/// PostgreSQL connection parameters for the database probe.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

/// Redis connection parameters for the cache probe.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub host: String,
    pub port: u16,
}

impl CacheConfig {
    /// Connection URL understood by the redis client.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }
}

/// RabbitMQ connection parameters for the broker probe.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub vhost: String,
    pub user: String,
    pub password: String,
}

impl BrokerConfig {
    /// AMQP URI for the configured broker.
    ///
    /// The default vhost `/` must appear percent-encoded in the URI path.
    pub fn amqp_uri(&self) -> String {
        let vhost = if self.vhost == "/" {
            "%2f"
        } else {
            self.vhost.as_str()
        };
        format!(
            "amqp://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, vhost
        )
    }
}

/// Full configuration for one service's health surface.
#[derive(Debug, Clone)]
pub struct HealthConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub broker: BrokerConfig,
}

impl HealthConfig {
    /// Reads the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `SERVICE_NAME`, `SERVICE_PORT`, `NODE_ENV`, `STARTUP_DELAY_MS`
    /// - `POSTGRES_HOST`, `POSTGRES_PORT`, `POSTGRES_DB`, `POSTGRES_USER`,
    ///   `POSTGRES_PASSWORD`
    /// - `REDIS_HOST`, `REDIS_PORT`
    /// - `RABBITMQ_HOST`, `RABBITMQ_PORT`, `RABBITMQ_VHOST`, `RABBITMQ_USER`,
    ///   `RABBITMQ_PASSWORD`
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable is set but not parsable.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig {
                name: env_or("SERVICE_NAME", "example-service"),
                version: env!("CARGO_PKG_VERSION").to_string(),
                port: env_u16("SERVICE_PORT", 8000),
                environment: env_or("NODE_ENV", "development"),
                startup_delay: env_var("STARTUP_DELAY_MS")
                    .map_or(DEFAULT_STARTUP_DELAY, |ms| {
                        Duration::from_millis(parse_number("STARTUP_DELAY_MS", &ms))
                    }),
            },
            database: DatabaseConfig {
                host: env_or("POSTGRES_HOST", "localhost"),
                port: env_u16("POSTGRES_PORT", 5432),
                database: env_or("POSTGRES_DB", "aktienanalyse_event_store"),
                user: env_or("POSTGRES_USER", "stock_analysis"),
                password: env_or("POSTGRES_PASSWORD", "secure_password"),
            },
            cache: CacheConfig {
                host: env_or("REDIS_HOST", "localhost"),
                port: env_u16("REDIS_PORT", 6379),
            },
            broker: BrokerConfig {
                host: env_or("RABBITMQ_HOST", "localhost"),
                port: env_u16("RABBITMQ_PORT", 5672),
                vhost: env_or("RABBITMQ_VHOST", "/"),
                user: env_or("RABBITMQ_USER", "stock_analysis"),
                password: env_or("RABBITMQ_PASSWORD", "stock_password"),
            },
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn env_or(name: &str, default: &str) -> String {
    env_var(name).unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env_var(name).map_or(default, |raw| parse_number(name, &raw))
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> T {
    raw.parse()
        .unwrap_or_else(|_| panic!("Env variable `{name}` should be a number, got `{raw}`"))
}

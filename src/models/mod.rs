mod config;
mod state;

pub use config::{BrokerConfig, CacheConfig, DatabaseConfig, HealthConfig, ServiceConfig};
pub use state::AppState;

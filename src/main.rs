use std::sync::Arc;

use pulse::models::{AppState, HealthConfig};
use pulse::{app, run_startup_sequence};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HealthConfig::from_env();
    let port = config.service.port;
    let state = Arc::new(AppState::new(config));

    tokio::spawn(run_startup_sequence(Arc::clone(&state)));

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind service port");
    info!(port, "Health server listening");

    axum::serve(listener, app(state).into_make_service())
        .await
        .unwrap();
}

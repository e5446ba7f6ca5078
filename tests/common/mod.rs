#![allow(dead_code)]

use std::sync::{Arc, Once};

use pulse::app;
use pulse::models::{AppState, HealthConfig};
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("pulse=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the health app on a random port and returns its address plus the
/// shared state, so tests can drive the readiness transition themselves.
///
/// Configuration comes from `tests/data/.test.env`, which zeroes the startup
/// delay and points every dependency at a closed port so probes fail fast and
/// deterministically without live infrastructure.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> (String, Arc<AppState>) {
    dotenvy::from_filename_override("tests/data/.test.env").unwrap();
    init_tracing_once();

    let state = Arc::new(AppState::new(HealthConfig::from_env()));

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let app_state = Arc::clone(&state);
    tokio::spawn(async move {
        axum::serve(listener, app(app_state)).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready; liveness answers as soon as the socket does
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health/live"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    (address, state)
}

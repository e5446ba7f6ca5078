mod common;

use std::sync::Arc;

use common::spawn_app;
use pulse::run_startup_sequence;
use serde_json::Value;

#[tokio::test]
async fn readiness_reports_each_unreachable_dependency() {
    let (address, state) = spawn_app().await;
    run_startup_sequence(Arc::clone(&state)).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{address}/health/ready"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["ready"], false);
    // Startup finished, but none of the dependencies is reachable
    assert_eq!(body["checks"]["service"], true);
    assert_eq!(body["checks"]["database"], false);
    assert_eq!(body["checks"]["cache"], false);
    assert_eq!(body["checks"]["broker"], false);
}

#[tokio::test]
async fn readiness_is_degraded_before_startup_completes() {
    let (address, _state) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/health/ready"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["ready"], false);
    assert_eq!(body["checks"]["service"], false);
}

#[tokio::test]
async fn failed_probes_still_produce_a_wellformed_response() {
    let (address, state) = spawn_app().await;
    run_startup_sequence(Arc::clone(&state)).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{address}/health/ready"))
        .send()
        .await
        .expect("Failed to execute request");

    // Every probe errored with a connection refusal, yet the endpoint still
    // answers with the full body instead of an empty 5xx
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["service"], "pulse-test");
    assert!(body["ready"].is_boolean());
    assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    for dependency in ["service", "database", "cache", "broker"] {
        assert!(
            body["checks"][dependency].is_boolean(),
            "missing check for {dependency}"
        );
    }
}

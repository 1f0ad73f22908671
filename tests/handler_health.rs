mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use email_capture::api::handlers::health_handler;
use email_capture::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = server(common::create_test_state(common::memory_store(&[])));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = server(common::create_test_state(common::memory_store(&[])));

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("store").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded_mode() {
    let server = server(common::create_degraded_state());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["message"], "Store not configured");
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let (state, _store) = common::create_failing_state();
    let server = server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["store"]["status"], "error");
    assert_eq!(json["checks"]["store"]["message"], "Store connection failed");
}

#[tokio::test]
async fn test_health_endpoint_store_unreachable_at_startup() {
    let server = server(common::create_unreachable_state());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(
        json["checks"]["store"]["message"],
        "Store unreachable at startup"
    );
}

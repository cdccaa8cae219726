//! Integration tests for the HTTP trivia client
//!
//! A local axum server bound to an ephemeral port stands in for the trivia
//! service, so the real client code path (URL layout, status handling,
//! timeout) is exercised without leaving the machine.

use axum::{
    body::Body,
    extract::Path,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use numclass_api::services::{fun_fact_or_fallback, FactError, FactProvider, NumbersApiClient};
use numclass_api::{build_router, AppState};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::util::ServiceExt;

/// Test helper: Start a fake trivia service and return its base URL
///
/// - `GET /{n}/math` answers "  {n} is a fake fact.\n" (padded to check trimming)
/// - `GET /404/math` answers 404
/// - `GET /500/math` answers 500
/// - `GET /1/math` answers after 2 seconds
async fn start_fake_trivia_service() -> String {
    async fn math_fact(Path(n): Path<i64>) -> (StatusCode, String) {
        match n {
            404 => (StatusCode::NOT_FOUND, "not found".to_string()),
            500 => (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
            1 => {
                tokio::time::sleep(Duration::from_secs(2)).await;
                (StatusCode::OK, "too late".to_string())
            }
            n => (StatusCode::OK, format!("  {} is a fake fact.\n", n)),
        }
    }

    let app = Router::new().route("/:n/math", get(math_fact));
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Test helper: Address nothing is listening on
async fn unused_address() -> SocketAddr {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn client(base_url: &str, timeout: Duration) -> NumbersApiClient {
    NumbersApiClient::new(base_url, timeout).expect("Client should build")
}

#[tokio::test]
async fn test_ok_response_is_trimmed() {
    let base = start_fake_trivia_service().await;
    let client = client(&base, Duration::from_secs(5));

    assert_eq!(client.fun_fact(42).await.unwrap(), "42 is a fake fact.");
    assert_eq!(client.fun_fact(-3).await.unwrap(), "-3 is a fake fact.");
}

#[tokio::test]
async fn test_non_200_is_api_error() {
    let base = start_fake_trivia_service().await;
    let client = client(&base, Duration::from_secs(5));

    match client.fun_fact(404).await {
        Err(FactError::ApiError(status, _)) => assert_eq!(status, 404),
        other => panic!("expected ApiError, got {:?}", other),
    }
    match client.fun_fact(500).await {
        Err(FactError::ApiError(status, body)) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let base = start_fake_trivia_service().await;
    let client = client(&base, Duration::from_millis(200));

    match client.fun_fact(1).await {
        Err(FactError::Timeout(timeout)) => assert_eq!(timeout, Duration::from_millis(200)),
        other => panic!("expected Timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let addr = unused_address().await;
    let client = client(&format!("http://{}", addr), Duration::from_secs(2));

    let result = client.fun_fact(7).await;
    assert!(
        matches!(result, Err(FactError::NetworkError(_))),
        "expected NetworkError, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_fallback_for_every_failure_mode() {
    let base = start_fake_trivia_service().await;
    let client = client(&base, Duration::from_millis(200));

    assert_eq!(fun_fact_or_fallback(&client, 404).await, "No fun fact available.");
    assert_eq!(fun_fact_or_fallback(&client, 1).await, "No fun fact available.");
    assert_eq!(fun_fact_or_fallback(&client, 6).await, "6 is a fake fact.");
}

#[tokio::test]
async fn test_classify_end_to_end_with_http_client() {
    let base = start_fake_trivia_service().await;
    let state = AppState::new(Arc::new(client(&base, Duration::from_secs(5))));
    let app = build_router(state);

    let request = Request::builder()
        .uri("/api/classify-number?number=28")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["fun_fact"], "28 is a fake fact.");
    assert_eq!(body["is_perfect"], true);
}

#[tokio::test]
async fn test_classify_end_to_end_with_unreachable_service() {
    let addr = unused_address().await;
    let state = AppState::new(Arc::new(client(
        &format!("http://{}", addr),
        Duration::from_secs(2),
    )));
    let app = build_router(state);

    let request = Request::builder()
        .uri("/api/classify-number?number=-5")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["fun_fact"], "No fun fact available.");
    assert_eq!(body["digit_sum"], 5);
    assert_eq!(body["properties"], serde_json::json!(["odd"]));
}

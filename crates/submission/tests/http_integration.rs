//! Integration tests for the HTTP transport against a local checkout backend.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use submission::{SubmissionClient, SubmitError};

async fn accept(Json(order): Json<Value>) -> Json<Value> {
    Json(json!({ "error": null, "data": order }))
}

async fn explode(Json(_order): Json<Value>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "boom" })),
    )
}

async fn read_only() -> &'static str {
    "GET only"
}

async fn spawn_backend() -> SocketAddr {
    let app = Router::new()
        .route("/api/checkout", post(accept))
        .route("/api/failing", post(explode))
        .route("/api/readonly", get(read_only));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_posts_json_and_returns_parsed_body() {
    let addr = spawn_backend().await;
    let client = SubmissionClient::http(format!("http://{addr}/api/checkout"));

    let order = json!({ "order": { "name": "Iron Man #1", "price": 72 } });
    let response = client.submit(&order).await.unwrap();

    // The backend's JSON extractor rejects anything but application/json.
    assert_eq!(response.status, 200);
    assert_eq!(response.error(), Some(&Value::Null));
    assert_eq!(response.body["data"], order);
}

#[tokio::test]
async fn test_server_error_body_is_returned() {
    let addr = spawn_backend().await;
    let client = SubmissionClient::http(format!("http://{addr}/api/failing"));

    let response = client.submit(&json!({})).await.unwrap();

    assert_eq!(response.status, 500);
    assert_eq!(response.error(), Some(&json!("boom")));
}

#[tokio::test]
async fn test_method_not_allowed_is_reported() {
    let addr = spawn_backend().await;
    let client = SubmissionClient::http(format!("http://{addr}/api/readonly"));

    let result = client.submit(&json!({})).await;

    assert!(matches!(result, Err(SubmitError::MethodNotAllowed)));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SubmissionClient::http(format!("http://{addr}/api/checkout"));
    let result = client.submit(&json!({})).await;

    assert!(matches!(result, Err(SubmitError::Network(_))));
}

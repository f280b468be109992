//! Integration tests for the status endpoint.
//!
//! Router-level tests drive the real router through `tower::ServiceExt`
//! without opening a socket. The end-to-end tests bind an ephemeral port,
//! serve the router, and issue real HTTP requests with reqwest.

use axum::{
    body::{Body, Bytes},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use eshop::routes::create_router;

async fn send(method: Method, uri: &str) -> (StatusCode, Bytes) {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Router returned an error");

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    (status, body)
}

#[tokio::test]
async fn get_status_returns_200_ok() {
    let (status, body) = send(Method::GET, "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn query_string_is_ignored() {
    let (status, body) = send(Method::GET, "/status?x=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn status_response_is_plain_text_and_uncached() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .uri("/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .expect("Missing content type")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/plain"));

    let cache_control = response
        .headers()
        .get(CACHE_CONTROL)
        .expect("Missing cache control")
        .to_str()
        .unwrap();
    assert_eq!(cache_control, "no-store");
}

#[tokio::test]
async fn post_to_status_is_method_not_allowed() {
    let (status, _) = send(Method::POST, "/status").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (status, _) = send(Method::GET, "/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let (first_status, first_body) = send(Method::GET, "/status").await;

    for _ in 0..4 {
        let (status, body) = send(Method::GET, "/status").await;
        assert_eq!(status, first_status);
        assert_eq!(body, first_body);
    }
}

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let app = create_router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn status_works_end_to_end() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/status"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn concurrent_requests_do_not_interfere() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let get = |client: reqwest::Client, address: String| async move {
        let response = client
            .get(format!("{address}/status"))
            .send()
            .await
            .expect("Failed to execute request");
        (response.status(), response.text().await.unwrap())
    };

    let (a, b, c, d) = tokio::join!(
        get(client.clone(), address.clone()),
        get(client.clone(), address.clone()),
        get(client.clone(), address.clone()),
        get(client, address),
    );

    for (status, body) in [a, b, c, d] {
        assert_eq!(status, reqwest::StatusCode::OK);
        assert_eq!(body, "OK");
    }
}

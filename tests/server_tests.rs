//! Integration tests for the HTTP boundary
//!
//! These tests spawn the real router on an ephemeral port and drive it with
//! a plain HTTP client, with wiremock standing in for the target website.

use brandmark::extract::build_http_client;
use brandmark::server::router;
use std::net::SocketAddr;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfakeimagedata";
const ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Spawns the app on an ephemeral port and returns its address
async fn spawn_app() -> SocketAddr {
    let client = build_http_client(5).expect("failed to build client");
    let app = router(client, ALLOWED_ORIGIN);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let addr = listener.local_addr().expect("no local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });

    addr
}

#[tokio::test]
async fn test_missing_url_is_bad_request() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{}/logo", addr))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    let body = response.text().await.unwrap();
    assert_eq!(body, "Invalid url to extract logo");
}

#[tokio::test]
async fn test_empty_url_is_bad_request() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{}/logo?url=", addr))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    assert_eq!(response.text().await.unwrap(), "Invalid url to extract logo");
}

#[tokio::test]
async fn test_successful_extraction_serves_image() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(
                    r#"<html><body><img class="logo" src="/logo.png"></body></html>"#,
                )
                .insert_header("content-type", "text/html"),
        )
        .mount(&upstream)
        .await;

    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PNG_BYTES, "image/png"))
        .mount(&upstream)
        .await;

    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/logo", addr))
        .query(&[("url", upstream.uri())])
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), PNG_BYTES);
}

#[tokio::test]
async fn test_no_logo_is_bad_request_with_distinct_message() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<html><body><p>nothing here</p></body></html>"#)
                .insert_header("content-type", "text/html"),
        )
        .mount(&upstream)
        .await;

    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/logo", addr))
        .query(&[("url", upstream.uri())])
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    let body = response.text().await.unwrap();
    assert_eq!(body, "Logo couldn't be extracted");
    // Distinguishable from the bad-input message
    assert_ne!(body, "Invalid url to extract logo");
}

#[tokio::test]
async fn test_unreachable_page_is_server_error() {
    let upstream = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&upstream)
        .await;

    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/logo", addr))
        .query(&[("url", upstream.uri())])
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 500);
    assert_eq!(
        response.text().await.unwrap(),
        "Error fetching or sending image"
    );
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/logo", addr))
        .header("origin", ALLOWED_ORIGIN)
        .send()
        .await
        .expect("request failed");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(ALLOWED_ORIGIN)
    );
}

#[tokio::test]
async fn test_cors_rejects_other_origin() {
    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/logo", addr))
        .header("origin", "http://evil.example.com")
        .send()
        .await
        .expect("request failed");

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_post_method_not_allowed() {
    let addr = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/logo", addr))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 405);
}

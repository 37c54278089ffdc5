// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use text_workshop::api::{self, AppState};
use text_workshop::{Resources, WorkshopConfig};

const BODY_LIMIT: usize = 1024 * 1024;

fn test_router() -> Router {
    api::router(AppState::with_defaults())
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    (status, bytes)
}

fn post_json(uri: &str, payload: Json) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET")
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, bytes) = send(test_router(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), "ok");
}

#[tokio::test]
async fn analyze_returns_every_section() {
    let payload = json!({ "text": "The cat sat. The dog ran." });
    let (status, bytes) = send(test_router(), post_json("/analyze", payload)).await;
    assert_eq!(status, StatusCode::OK);

    let v: Json = serde_json::from_slice(&bytes).expect("parse analyze json");
    for key in ["document_id", "warnings", "counts", "sentences", "vocabulary", "frequency", "sentiment"] {
        assert!(v.get(key).is_some(), "missing '{key}'");
    }
    assert_eq!(v["counts"]["word_count"], 6);
    assert_eq!(v["sentences"]["count"], 2);
    assert_eq!(v["vocabulary"]["hapax"], json!(["cat", "sat", "dog", "ran"]));
    assert_eq!(v["vocabulary"]["window_size"], 50);
    assert!(v["vocabulary"]["windowed_ttr"].is_null());
    assert_eq!(v["sentiment"]["polarity"], "neutral");
    assert_eq!(v["warnings"], json!([]));
}

#[tokio::test]
async fn analyze_honours_window_size() {
    let text = "alpha beta gamma delta ".repeat(10);
    let payload = json!({ "text": text, "window_size": 10 });
    let (status, bytes) = send(test_router(), post_json("/analyze", payload)).await;
    assert_eq!(status, StatusCode::OK);

    let v: Json = serde_json::from_slice(&bytes).unwrap();
    let series = v["vocabulary"]["windowed_ttr"].as_array().expect("series");
    assert_eq!(series.len(), 4);
    assert!(series.iter().all(|x| x.as_f64() == Some(0.4)));
}

#[tokio::test]
async fn analyze_rejects_out_of_range_window() {
    for bad in [0, 5, 45, 110] {
        let payload = json!({ "text": "hello", "window_size": bad });
        let (status, bytes) = send(test_router(), post_json("/analyze", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "window {bad}");
        let v: Json = serde_json::from_slice(&bytes).unwrap();
        assert!(v["error"].as_str().unwrap().contains("window size"));
    }
}

#[tokio::test]
async fn analyze_with_missing_resources_warns_instead_of_failing() {
    let state = AppState::new(
        &WorkshopConfig::default(),
        Arc::new(Resources::missing("rules not installed")),
    );
    let payload = json!({ "text": "Something happened. Then more." });
    let (status, bytes) = send(api::router(state), post_json("/analyze", payload)).await;
    assert_eq!(status, StatusCode::OK);

    let v: Json = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["warnings"].as_array().unwrap().len(), 1);
    assert_eq!(v["counts"]["word_count"], 0);
    assert_eq!(v["counts"]["char_count"], 30);
    assert_eq!(v["sentiment"]["document_score"], 0.0);
}

#[tokio::test]
async fn sample_prompts_and_config() {
    let (status, bytes) = send(test_router(), get("/sample")).await;
    assert_eq!(status, StatusCode::OK);
    let v: Json = serde_json::from_slice(&bytes).unwrap();
    assert!(v["text"].as_str().unwrap().len() > 100);

    let (status, bytes) = send(test_router(), get("/prompts")).await;
    assert_eq!(status, StatusCode::OK);
    let v: Json = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 4);
    assert_eq!(v[0]["section"], "sentences");

    let (status, bytes) = send(test_router(), get("/config")).await;
    assert_eq!(status, StatusCode::OK);
    let v: Json = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["analysis"]["window_size"], 50);
    assert_eq!(v["resources_ready"], true);
    assert_eq!(v["window_size_step"], 10);
}

#[tokio::test]
async fn report_is_a_stub() {
    let req = Request::builder()
        .method("POST")
        .uri("/report")
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send(test_router(), req).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    let v: Json = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v["status"], "not_implemented");
}

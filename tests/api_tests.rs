//! API endpoint integration tests

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use boboddy_engine::banks::CREED_QUOTES;
use boboddy_engine::config::Settings;
use boboddy_engine::AppState;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

async fn test_router() -> Router {
    let state = Arc::new(AppState {
        settings: Arc::new(RwLock::new(Settings::default())),
    });
    boboddy_engine::api::routes::create_router(state).await
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_index_page() {
    let app = test_router().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("BOBODDY"));
    assert!(html.contains("acronym-letters"));
}

#[tokio::test]
async fn test_health_is_fixed() {
    let app = test_router().await;

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "healthy"}));
    }
}

#[tokio::test]
async fn test_generate_acronym_shape() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/generate_acronym")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let acronym = body["acronym"].as_str().unwrap();
    assert!((5..=8).contains(&acronym.len()));
    assert!(acronym.chars().all(|c| c.is_ascii_uppercase()));
}

#[tokio::test]
async fn test_generate_acronym_lengths_vary() {
    let app = test_router().await;
    let mut lengths = HashSet::new();

    for _ in 0..100 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/generate_acronym")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        lengths.insert(body["acronym"].as_str().unwrap().len());
    }

    assert!(lengths.len() >= 2, "only saw lengths {lengths:?}");
}

async fn post_definition(app: Router, payload: Value) -> Value {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/get_definition")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn test_get_definition_creed_mode() {
    let app = test_router().await;

    let body = post_definition(app, json!({"letter": "C", "mode": "creed"})).await;
    let definition = body["definition"].as_str().unwrap();
    assert!(CREED_QUOTES.contains(&definition));
}

#[tokio::test]
async fn test_get_definition_corporate_mode() {
    let app = test_router().await;

    let body = post_definition(app, json!({"letter": "B", "mode": "corporate"})).await;
    let definition = body["definition"].as_str().unwrap();
    assert!(definition.starts_with('B'), "got {definition}");
}

#[tokio::test]
async fn test_get_definition_manual_mode() {
    let app = test_router().await;

    let body = post_definition(app, json!({"letter": "B", "mode": "manual"})).await;
    assert_eq!(body["definition"], "");
}

#[tokio::test]
async fn test_get_definition_unknown_mode_behaves_as_manual() {
    let app = test_router().await;

    let body = post_definition(app, json!({"letter": "B", "mode": "no-such-mode"})).await;
    assert_eq!(body["definition"], "");
}

#[tokio::test]
async fn test_get_definition_defaults() {
    // Missing fields default to empty letter and manual mode
    let app = test_router().await;

    let body = post_definition(app, json!({})).await;
    assert_eq!(body["definition"], "");
}

#[tokio::test]
async fn test_get_definition_rejects_malformed_body() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/get_definition")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

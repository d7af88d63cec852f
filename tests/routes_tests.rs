use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt;

use cleanlyfe::db::registry::DbRegistry;
use cleanlyfe::router::{AppState, app_router};

fn test_app() -> axum::Router {
    let state = AppState::new(Arc::new(DbRegistry::new()));
    app_router(state)
}

async fn body_string(resp: axum::response::Response) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}

#[tokio::test]
async fn index_route_serves_chat_page() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("<title>Cleanlyfe</title>"));
    assert!(body.contains("messages-container"));
}

#[tokio::test]
async fn test_route_serves_test_page() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/test")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Test page"));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/does-not-exist")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_route_reports_uninitialized_database() {
    let resp = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(resp).await;
    assert!(body.contains(r#""code":"NOT_INITIALIZED""#));
}

#![cfg(feature = "server")]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use roster_kernel::domain::config::ApiConfig;
use roster_kernel::server::ApiState;
use roster_kernel::server::router::system_router;
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_up_without_caching() {
    let state = ApiState::builder().config(ApiConfig::default()).build().unwrap();
    let (router, api): (axum::Router, _) = system_router().with_state(state).split_for_parts();

    assert!(api.paths.paths.contains_key("/health"));

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store, no-cache, must-revalidate"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "up");
    assert_eq!(body["slices"], 0);
    assert!(body["uptime"].is_u64());
}

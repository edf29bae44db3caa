//! E2E tests for concurrent health checks.

mod helpers;

use std::sync::Arc;

use helpers::TestServer;
use reqwest::StatusCode;
use tokio::task::JoinSet;
use wq_protocol::HealthStatus;
use wq_protocol::routes::health_path;

/// 100 simultaneous requests each get their own correct response.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn e2e_hundred_concurrent_health_checks() {
    let server = Arc::new(TestServer::spawn().await);
    let mut tasks = JoinSet::new();

    for _ in 0..100 {
        let server = Arc::clone(&server);
        tasks.spawn(async move { server.get(&health_path()).await });
    }

    let mut completed = 0;
    while let Some(result) = tasks.join_next().await {
        let (status, body) = result.unwrap();
        assert_eq!(status, StatusCode::OK);
        let parsed: HealthStatus = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, HealthStatus::ok());
        completed += 1;
    }
    assert_eq!(completed, 100);

    let Ok(server) = Arc::try_unwrap(server) else {
        panic!("request tasks still hold the server");
    };
    server.stop().await.unwrap();
}

/// The in-process router answers concurrent oneshot calls independently.
#[tokio::test]
async fn e2e_concurrent_oneshot_calls() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let router = wq_service::routes::build_router();
    let mut tasks = JoinSet::new();

    for _ in 0..50 {
        let router = router.clone();
        tasks.spawn(async move {
            let resp = router
                .oneshot(Request::get(health_path()).body(Body::empty()).unwrap())
                .await
                .unwrap();
            resp.status()
        });
    }

    while let Some(status) = tasks.join_next().await {
        assert_eq!(status.unwrap(), axum::http::StatusCode::OK);
    }
}

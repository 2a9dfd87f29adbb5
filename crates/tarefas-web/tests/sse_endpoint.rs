//! Integration test for SSE endpoint

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tarefas_core::{DataStore, DocumentStore, StoreConfig};
use tarefas_types::UserIdentity;
use tower::ServiceExt;

#[tokio::test]
async fn test_sse_endpoint_requires_session() {
    let store = Arc::new(DataStore::in_memory().unwrap());
    let router = tarefas_web::create_router(store);

    let request = Request::builder()
        .uri("/api/events")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sse_endpoint_streams_task_list() {
    let store = Arc::new(DataStore::in_memory().unwrap());
    let ana = UserIdentity::new("ana@example.com", "Ana");
    store.create_task(&ana, "Já existia", false).unwrap();
    let token = store.sessions().sign_in(ana.clone()).await.unwrap();

    let request = Request::builder()
        .uri("/api/events")
        .header(header::COOKIE, format!("tarefas_session={}", token))
        .body(Body::empty())
        .unwrap();
    let response = tarefas_web::create_router(Arc::clone(&store))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert!(content_type.unwrap().contains("text/event-stream"));

    let mut body = response.into_body();

    // Initial snapshot
    let frame = tokio::time::timeout(Duration::from_secs(2), body.frame())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    let text = String::from_utf8(frame.into_data().unwrap().to_vec()).unwrap();
    assert!(text.contains("event: tasks"));
    assert!(text.contains("Já existia"));

    // Update pushed after a write
    store.create_task(&ana, "Nova tarefa", true).unwrap();
    let frame = tokio::time::timeout(Duration::from_secs(2), body.frame())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    let text = String::from_utf8(frame.into_data().unwrap().to_vec()).unwrap();
    assert!(text.contains("Nova tarefa"));
    assert!(text.contains("Já existia"));
}

#[tokio::test]
async fn test_sse_share_links_use_public_url() {
    let store = Arc::new(DataStore::new(
        DocumentStore::open_in_memory().unwrap(),
        StoreConfig {
            public_url: "https://tarefas.example.com".to_string(),
            ..StoreConfig::default()
        },
    ));
    let ana = UserIdentity::new("ana@example.com", "Ana");
    let task = store.create_task(&ana, "Compartilhada", true).unwrap();
    let token = store.sessions().sign_in(ana).await.unwrap();

    let request = Request::builder()
        .uri("/api/events")
        .header(header::HOST, "127.0.0.1:3000")
        .header(header::COOKIE, format!("tarefas_session={}", token))
        .body(Body::empty())
        .unwrap();
    let response = tarefas_web::create_router(Arc::clone(&store))
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let frame = tokio::time::timeout(Duration::from_secs(2), response.into_body().frame())
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    let text = String::from_utf8(frame.into_data().unwrap().to_vec()).unwrap();
    assert!(text.contains(&format!(
        "\"shareUrl\":\"https://tarefas.example.com/task/{}\"",
        task.id
    )));
    assert!(!text.contains("127.0.0.1"));
}

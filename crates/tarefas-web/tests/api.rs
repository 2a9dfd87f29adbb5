//! Integration tests for the JSON API

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tarefas_core::DataStore;
use tarefas_types::UserIdentity;
use tower::ServiceExt;

fn ana() -> UserIdentity {
    UserIdentity::new("ana@example.com", "Ana")
}

fn bia() -> UserIdentity {
    UserIdentity::new("bia@example.com", "Bia")
}

async fn cookie_for(store: &DataStore, user: UserIdentity) -> String {
    let token = store.sessions().sign_in(user).await.unwrap();
    format!("tarefas_session={}", token)
}

async fn send(
    store: &Arc<DataStore>,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    json: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let body = match json {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    tarefas_web::create_router(Arc::clone(store))
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_api_requires_session() {
    let store = Arc::new(DataStore::in_memory().unwrap());

    let response = send(&store, "GET", "/api/tasks", None, None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Sign in required");

    let response = send(
        &store,
        "POST",
        "/api/tasks",
        None,
        Some(serde_json::json!({"content": "x"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_tasks() {
    let store = Arc::new(DataStore::in_memory().unwrap());
    let cookie = cookie_for(&store, ana()).await;

    let response = send(
        &store,
        "POST",
        "/api/tasks",
        Some(&cookie),
        Some(serde_json::json!({"content": "Via API", "public": true})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["content"], "Via API");
    assert_eq!(created["user"], "ana@example.com");
    assert_eq!(created["public"], true);

    let response = send(&store, "GET", "/api/tasks", Some(&cookie), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = json_body(response).await;
    assert_eq!(list["count"], 1);
    assert_eq!(list["tasks"][0]["id"], created["id"]);
}

#[tokio::test]
async fn test_create_empty_task_is_bad_request() {
    let store = Arc::new(DataStore::in_memory().unwrap());
    let cookie = cookie_for(&store, ana()).await;

    let response = send(
        &store,
        "POST",
        "/api/tasks",
        Some(&cookie),
        Some(serde_json::json!({"content": "   "})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_task_status_codes() {
    let store = Arc::new(DataStore::in_memory().unwrap());
    let ana_cookie = cookie_for(&store, ana()).await;
    let bia_cookie = cookie_for(&store, bia()).await;
    let task = store.create_task(&ana(), "Minha", false).unwrap();
    let uri = format!("/api/tasks/{}", task.id);

    let response = send(&store, "DELETE", &uri, Some(&bia_cookie), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&store, "DELETE", &uri, Some(&ana_cookie), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&store, "DELETE", &uri, Some(&ana_cookie), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_task_detail_hides_private_tasks() {
    let store = Arc::new(DataStore::in_memory().unwrap());
    let private = store.create_task(&ana(), "Privada", false).unwrap();
    let public = store.create_task(&ana(), "Pública", true).unwrap();
    store.add_comment(&bia(), &public.id, "Legal").unwrap();

    let response = send(&store, "GET", &format!("/api/tasks/{}", private.id), None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&store, "GET", &format!("/api/tasks/{}", public.id), None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["task"]["taskId"], public.id.as_str());
    assert_eq!(body["task"]["content"], "Pública");
    assert_eq!(body["comments"][0]["content"], "Legal");
    assert_eq!(body["comments"][0]["name"], "Bia");
}

#[tokio::test]
async fn test_comment_endpoints() {
    let store = Arc::new(DataStore::in_memory().unwrap());
    let ana_cookie = cookie_for(&store, ana()).await;
    let bia_cookie = cookie_for(&store, bia()).await;
    let task = store.create_task(&ana(), "Debate", true).unwrap();

    let response = send(
        &store,
        "POST",
        &format!("/api/tasks/{}/comments", task.id),
        Some(&bia_cookie),
        Some(serde_json::json!({"content": "Concordo"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let comment = json_body(response).await;
    assert_eq!(comment["taskId"], task.id.as_str());
    let comment_id = comment["id"].as_str().unwrap().to_string();

    let uri = format!("/api/comments/{}", comment_id);
    let response = send(&store, "DELETE", &uri, Some(&ana_cookie), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(&store, "DELETE", &uri, Some(&bia_cookie), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_share_link_endpoint() {
    let store = Arc::new(DataStore::in_memory().unwrap());
    let cookie = cookie_for(&store, ana()).await;
    let public = store.create_task(&ana(), "Compartilhar", true).unwrap();
    let private = store.create_task(&ana(), "Guardar", false).unwrap();

    let response = send(
        &store,
        "GET",
        &format!("/api/tasks/{}/share", public.id),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["url"], store.share_url(&public.id));

    let response = send(
        &store,
        "GET",
        &format!("/api/tasks/{}/share", private.id),
        Some(&cookie),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_endpoint() {
    let store = Arc::new(DataStore::in_memory().unwrap());
    store.create_task(&ana(), "Uma", true).unwrap();

    let response = send(&store, "GET", "/api/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["tasks"], 1);
    assert_eq!(body["public_tasks"], 1);
}

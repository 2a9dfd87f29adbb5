//! JSON API

use crate::auth::ApiUser;
use crate::error::ApiError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tarefas_core::{DataStore, DegradedState, StoreCounts};
use tarefas_types::{Comment, Task, TaskDetail};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub content: String,
    #[serde(default)]
    pub public: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub count: usize,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskDetailResponse {
    pub task: TaskDetail,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShareResponse {
    pub url: String,
}

pub async fn list_tasks(
    State(store): State<Arc<DataStore>>,
    ApiUser(user): ApiUser,
) -> Result<Json<TaskListResponse>, ApiError> {
    let tasks = store.list_tasks(&user.email)?;
    Ok(Json(TaskListResponse {
        count: tasks.len(),
        tasks,
    }))
}

pub async fn create_task(
    State(store): State<Arc<DataStore>>,
    ApiUser(user): ApiUser,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = store.create_task(&user, &request.content, request.public)?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn delete_task(
    State(store): State<Arc<DataStore>>,
    ApiUser(user): ApiUser,
    Path(task_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete_task(&user, &task_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Public: no session needed
pub async fn task_detail(
    State(store): State<Arc<DataStore>>,
    Path(task_id): Path<String>,
) -> Result<Json<TaskDetailResponse>, ApiError> {
    let (task, comments) = store.task_detail(&task_id)?;
    Ok(Json(TaskDetailResponse { task, comments }))
}

pub async fn share_link(
    State(store): State<Arc<DataStore>>,
    ApiUser(user): ApiUser,
    Path(task_id): Path<String>,
) -> Result<Json<ShareResponse>, ApiError> {
    let url = store.share_link(&user, &task_id)?;
    Ok(Json(ShareResponse { url }))
}

pub async fn add_comment(
    State(store): State<Arc<DataStore>>,
    ApiUser(user): ApiUser,
    Path(task_id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let comment = store.add_comment(&user, &task_id, &request.content)?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn delete_comment(
    State(store): State<Arc<DataStore>>,
    ApiUser(user): ApiUser,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete_comment(&user, &comment_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn health(State(store): State<Arc<DataStore>>) -> Json<serde_json::Value> {
    let state = store.degraded_state();
    let counts = store
        .counts()
        .inspect_err(|e| warn!(error = %e, "Failed to count documents"))
        .ok();

    Json(health_body(
        &state,
        counts,
        store.sessions().active_count(),
        store.event_bus().subscriber_count(),
    ))
}

/// Counts that could not be read make the report degraded
fn health_body(
    state: &DegradedState,
    counts: Option<StoreCounts>,
    sessions: u64,
    subscribers: usize,
) -> serde_json::Value {
    let healthy = state.is_healthy() && counts.is_some();
    let counts = counts.unwrap_or_default();

    serde_json::json!({
        "status": if healthy { "healthy" } else { "degraded" },
        "tasks": counts.tasks,
        "public_tasks": counts.public_tasks,
        "comments": counts.comments,
        "sessions": sessions,
        "subscribers": subscribers,
    })
}

//! Web router using Axum

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tarefas_core::DataStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::ApiUser;
use crate::handlers::{actions, api, pages};
use crate::{assets, sse};

/// Create the web router
pub fn create_router(store: Arc<DataStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/dashboard", get(pages::dashboard))
        .route("/task/{id}", get(pages::task))
        // Form posts
        .route("/auth/signin", post(actions::sign_in))
        .route("/auth/signout", post(actions::sign_out))
        .route("/dashboard/tasks", post(actions::create_task))
        .route("/dashboard/tasks/{id}/delete", post(actions::delete_task))
        .route("/task/{id}/comments", post(actions::add_comment))
        .route(
            "/task/{id}/comments/{comment_id}/delete",
            post(actions::delete_comment),
        )
        // JSON API
        .route("/api/tasks", get(api::list_tasks).post(api::create_task))
        .route(
            "/api/tasks/{id}",
            get(api::task_detail).delete(api::delete_task),
        )
        .route("/api/tasks/{id}/comments", post(api::add_comment))
        .route("/api/tasks/{id}/share", get(api::share_link))
        .route("/api/comments/{id}", delete(api::delete_comment))
        .route("/api/events", get(sse_handler))
        .route("/api/health", get(api::health))
        // Static assets
        .route("/assets/{*path}", get(assets::serve))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(store)
}

/// SSE endpoint streaming the signed-in user's task list
async fn sse_handler(State(store): State<Arc<DataStore>>, ApiUser(user): ApiUser) -> Response {
    let subscription = store.watch_tasks(&user.email);
    sse::create_sse_stream(Arc::clone(&store), subscription).into_response()
}

//! HTML page handlers with server-side session gating

use crate::auth::MaybeUser;
use crate::pages::dashboard::DashboardItem;
use crate::pages::{self, render_document, DashboardPage, HomePage, TaskPage};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use leptos::prelude::*;
use std::sync::Arc;
use tarefas_core::DataStore;
use tracing::{debug, error, info};

pub async fn home(maybe_user: MaybeUser) -> Response {
    let user = maybe_user.user().cloned();
    let signed_in = user.is_some();

    render_document(
        pages::home::TITLE,
        user,
        view! { <HomePage signed_in=signed_in /> },
    )
    .into_response()
}

/// Signed-out visitors are sent back to the landing page
pub async fn dashboard(State(store): State<Arc<DataStore>>, maybe_user: MaybeUser) -> Response {
    let Some(user) = maybe_user.user().cloned() else {
        info!("Unauthenticated dashboard request");
        return Redirect::to("/").into_response();
    };

    debug!(user = %user.email, "Authenticated dashboard request");

    let tasks = store.list_tasks(&user.email).unwrap_or_else(|e| {
        error!(user = %user.email, error = %e, "Failed to load tasks");
        Vec::new()
    });

    let items: Vec<DashboardItem> = tasks
        .into_iter()
        .map(|task| DashboardItem {
            share_url: task.public.then(|| store.share_url(&task.id)),
            task,
        })
        .collect();

    render_document(
        pages::dashboard::TITLE,
        Some(user),
        view! { <DashboardPage items=items /> },
    )
    .into_response()
}

/// Missing and private tasks redirect to the landing page
pub async fn task(
    State(store): State<Arc<DataStore>>,
    Path(task_id): Path<String>,
    maybe_user: MaybeUser,
) -> Response {
    let (detail, comments) = match store.task_detail(&task_id) {
        Ok(found) => found,
        Err(e) if e.is_not_found() => {
            debug!(task_id, "Task unavailable, redirecting");
            return Redirect::to("/").into_response();
        }
        Err(e) => {
            error!(task_id, error = %e, "Failed to load task");
            return Redirect::to("/").into_response();
        }
    };

    let user = maybe_user.user().cloned();
    let viewer = user.as_ref().map(|u| u.email.clone());

    render_document(
        pages::task::TITLE,
        user,
        view! { <TaskPage detail=detail comments=comments viewer=viewer /> },
    )
    .into_response()
}

//! Form posts
//!
//! Best effort: failures are logged and the browser is redirected back to
//! the page it came from.

use crate::auth::{clear_session_cookie, session_cookie, MaybeUser};
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;
use tarefas_core::{CoreError, DataStore};
use tarefas_types::UserIdentity;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub content: String,
    /// Checkbox: present ("on") only when ticked
    #[serde(default)]
    pub public: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub content: String,
}

pub async fn sign_in(State(store): State<Arc<DataStore>>, Form(form): Form<SignInForm>) -> Response {
    let identity = UserIdentity::new(form.email.trim(), form.name.trim());

    match store.sessions().sign_in(identity).await {
        Ok(token) => {
            info!(user = %form.email.trim(), "User signed in");
            let cookie = session_cookie(&token, store.sessions().ttl());
            ([cookie], Redirect::to("/dashboard")).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Sign-in rejected");
            Redirect::to("/").into_response()
        }
    }
}

pub async fn sign_out(State(store): State<Arc<DataStore>>, maybe_user: MaybeUser) -> Response {
    if let Some(session) = maybe_user.0 {
        store.sessions().sign_out(&session.token).await;
        info!(user = %session.user.email, "User signed out");
    }
    ([clear_session_cookie()], Redirect::to("/")).into_response()
}

pub async fn create_task(
    State(store): State<Arc<DataStore>>,
    maybe_user: MaybeUser,
    Form(form): Form<TaskForm>,
) -> Redirect {
    let Some(user) = maybe_user.user() else {
        return Redirect::to("/");
    };

    match store.create_task(user, &form.content, form.public.is_some()) {
        Ok(_) => {}
        Err(CoreError::EmptyContent) => debug!("Empty task ignored"),
        Err(e) => warn!(user = %user.email, error = %e, "Failed to add task"),
    }

    Redirect::to("/dashboard")
}

pub async fn delete_task(
    State(store): State<Arc<DataStore>>,
    maybe_user: MaybeUser,
    Path(task_id): Path<String>,
) -> Redirect {
    let Some(user) = maybe_user.user() else {
        return Redirect::to("/");
    };

    if let Err(e) = store.delete_task(user, &task_id) {
        warn!(task_id, user = %user.email, error = %e, "Failed to delete task");
    }

    Redirect::to("/dashboard")
}

pub async fn add_comment(
    State(store): State<Arc<DataStore>>,
    maybe_user: MaybeUser,
    Path(task_id): Path<String>,
    Form(form): Form<CommentForm>,
) -> Redirect {
    let back = format!("/task/{}", task_id);

    let Some(user) = maybe_user.user() else {
        return Redirect::to(&back);
    };

    match store.add_comment(user, &task_id, &form.content) {
        Ok(_) => {}
        Err(CoreError::EmptyContent) => debug!("Empty comment ignored"),
        Err(e) => warn!(task_id, user = %user.email, error = %e, "Failed to add comment"),
    }

    Redirect::to(&back)
}

pub async fn delete_comment(
    State(store): State<Arc<DataStore>>,
    maybe_user: MaybeUser,
    Path((task_id, comment_id)): Path<(String, String)>,
) -> Redirect {
    let back = format!("/task/{}", task_id);

    if let Some(user) = maybe_user.user() {
        if let Err(e) = store.delete_task_comment(user, &task_id, &comment_id) {
            warn!(comment_id, user = %user.email, error = %e, "Failed to delete comment");
        }
    }

    Redirect::to(&back)
}

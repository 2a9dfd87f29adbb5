//! Session cookie handling and request extractors

use crate::error::ApiError;
use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tarefas_core::{DataStore, SessionToken};
use tarefas_types::UserIdentity;

pub const SESSION_COOKIE: &str = "tarefas_session";

/// A resolved session
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: UserIdentity,
}

/// Extract the session token from the `Cookie` headers
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` header starting a session
pub fn session_cookie(token: &SessionToken, ttl: Duration) -> (HeaderName, String) {
    (
        SET_COOKIE,
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            SESSION_COOKIE,
            token,
            ttl.as_secs()
        ),
    )
}

/// `Set-Cookie` header ending a session
pub fn clear_session_cookie() -> (HeaderName, String) {
    (
        SET_COOKIE,
        format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE),
    )
}

async fn resolve(parts: &Parts, store: &DataStore) -> Option<Session> {
    let token = session_token(&parts.headers)?;
    let user = store.sessions().get(&token).await?;
    Some(Session { token, user })
}

/// Session if present; pages decide what to do without one
pub struct MaybeUser(pub Option<Session>);

impl MaybeUser {
    pub fn user(&self) -> Option<&UserIdentity> {
        self.0.as_ref().map(|session| &session.user)
    }
}

impl FromRequestParts<Arc<DataStore>> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        store: &Arc<DataStore>,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(resolve(parts, store).await))
    }
}

/// Session required; rejects with 401 for the JSON API
pub struct ApiUser(pub UserIdentity);

impl FromRequestParts<Arc<DataStore>> for ApiUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        store: &Arc<DataStore>,
    ) -> Result<Self, Self::Rejection> {
        resolve(parts, store)
            .await
            .map(|session| ApiUser(session.user))
            .ok_or_else(ApiError::unauthorized)
    }
}

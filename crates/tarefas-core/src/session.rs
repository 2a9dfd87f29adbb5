//! Session provider
//!
//! Opaque tokens mapped to a [`UserIdentity`] in a moka cache. Expired or
//! evicted sessions simply stop resolving.

use crate::error::{CoreError, Result};
use moka::future::Cache;
use std::fmt;
use std::time::Duration;
use tarefas_types::UserIdentity;
use tracing::debug;

/// Opaque session token carried in the session cookie
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// In-memory session store with time-to-live expiry
pub struct SessionStore {
    sessions: Cache<String, UserIdentity>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        let sessions = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self { sessions, ttl }
    }

    /// Start a session; the identity needs at least an email
    pub async fn sign_in(&self, identity: UserIdentity) -> Result<SessionToken> {
        if identity.email.trim().is_empty() {
            return Err(CoreError::MissingIdentity);
        }

        let token = SessionToken::generate();
        debug!(user = %identity.email, "Session started");
        self.sessions
            .insert(token.as_str().to_string(), identity)
            .await;
        Ok(token)
    }

    pub async fn get(&self, token: &str) -> Option<UserIdentity> {
        self.sessions.get(token).await
    }

    pub async fn sign_out(&self, token: &str) {
        self.sessions.invalidate(token).await;
    }

    /// Approximate number of live sessions
    pub fn active_count(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

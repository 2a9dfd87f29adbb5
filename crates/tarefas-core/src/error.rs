//! Error types for tarefas-core
//!
//! One error hierarchy with thiserror. The web layer decides whether an error
//! becomes a redirect, a log line or an HTTP status.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Tarefas+ operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Storage Errors
    // ===================
    #[error("Failed to open database: {path}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error during {operation}")]
    Database {
        operation: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database schema version {found} is not supported (expected {expected})")]
    SchemaVersion { found: i32, expected: i32 },

    #[error("Failed to create directory: {path}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Document Errors
    // ===================
    #[error("Content must not be empty")]
    EmptyContent,

    #[error("Task not found: {task_id}")]
    TaskNotFound { task_id: String },

    #[error("Task is not public: {task_id}")]
    TaskNotPublic { task_id: String },

    #[error("Comment not found: {comment_id}")]
    CommentNotFound { comment_id: String },

    // ===================
    // Session Errors
    // ===================
    #[error("{user} is not allowed to {action}")]
    Forbidden { user: String, action: &'static str },

    #[error("Session identity is missing an email or a display name")]
    MissingIdentity,

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML in {path}: {message}")]
    TomlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: toml::de::Error,
    },
}

impl CoreError {
    /// Build a `map_err` adapter tagging a rusqlite error with the operation
    pub(crate) fn database(operation: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| CoreError::Database { operation, source }
    }

    /// Missing documents and private tasks look the same to visitors
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::TaskNotFound { .. }
                | CoreError::TaskNotPublic { .. }
                | CoreError::CommentNotFound { .. }
        )
    }

    /// Errors caused by the request rather than by the server
    pub fn is_client_error(&self) -> bool {
        self.is_not_found()
            || matches!(
                self,
                CoreError::EmptyContent | CoreError::Forbidden { .. } | CoreError::MissingIdentity
            )
    }
}

/// Degraded state indicator for the data store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradedState {
    /// Database reachable
    Healthy,
    /// Database check failed, reads and writes will error
    Unavailable { reason: String },
}

impl DegradedState {
    pub fn is_healthy(&self) -> bool {
        matches!(self, DegradedState::Healthy)
    }

    pub fn is_degraded(&self) -> bool {
        !self.is_healthy()
    }
}

//! tarefas-types - Shared data types for Tarefas+
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - tarefas-core (store, sessions, live queries)
//! - tarefas-web (pages and JSON API)
//! - tarefas (CLI tables)

pub mod models;

pub use models::{Comment, NewComment, NewTask, Task, TaskDetail, UserIdentity};

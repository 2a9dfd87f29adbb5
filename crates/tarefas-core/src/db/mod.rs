//! SQLite document store for tasks and comments
//!
//! Two collections, one table each. Identifiers are generated by the store,
//! timestamps are kept as UTC milliseconds.
//!
//! Schema:
//! - tasks: id, user, content, created_ms, public
//! - comments: id, task_id, content, user, name, created_ms
//! - Indexes: tasks(user, created_ms), comments(task_id, created_ms)
//!
//! Comments are not removed with their task; nothing reads them once the task
//! is gone.
//!
//! Schema Version History:
//! - v1: Initial tasks + comments collections

mod comments;
mod tasks;

use crate::error::{CoreError, Result};
use chrono::{DateTime, SubsecRound, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Document counts, used by `stats` and the health endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub tasks: u64,
    pub public_tasks: u64,
    pub comments: u64,
    pub owners: u64,
}

/// SQLite-backed document store (thread-safe)
pub struct DocumentStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl DocumentStore {
    /// Create or open the database file
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path).map_err(|source| CoreError::DatabaseOpen {
            path: path.to_path_buf(),
            source,
        })?;

        // WAL lets readers proceed while a write is in flight
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(CoreError::database("enable WAL mode"))?;

        let store = Self::init(conn, Some(path.to_path_buf()))?;
        debug!(path = %path.display(), "Document store opened");
        Ok(store)
    }

    /// Open a throwaway database, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| CoreError::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS store_metadata (
                key TEXT PRIMARY KEY,
                value INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS tasks (
                id TEXT PRIMARY KEY,
                user TEXT NOT NULL,
                content TEXT NOT NULL,
                created_ms INTEGER NOT NULL,
                public INTEGER NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS comments (
                id TEXT PRIMARY KEY,
                task_id TEXT NOT NULL,
                content TEXT NOT NULL,
                user TEXT NOT NULL,
                name TEXT NOT NULL,
                created_ms INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_user ON tasks(user, created_ms);
            CREATE INDEX IF NOT EXISTS idx_comments_task ON comments(task_id, created_ms);
            "#,
        )
        .map_err(CoreError::database("create schema"))?;

        let stored_version: Option<i32> = conn
            .query_row(
                "SELECT value FROM store_metadata WHERE key = 'version'",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(CoreError::database("read schema version"))?;

        match stored_version {
            None => {
                conn.execute(
                    "INSERT INTO store_metadata (key, value) VALUES ('version', ?)",
                    params![SCHEMA_VERSION],
                )
                .map_err(CoreError::database("record schema version"))?;
                debug!("Schema version initialized to {}", SCHEMA_VERSION);
            }
            Some(v) if v != SCHEMA_VERSION => {
                return Err(CoreError::SchemaVersion {
                    found: v,
                    expected: SCHEMA_VERSION,
                });
            }
            Some(_) => {}
        }

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Database file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Cheap liveness probe
    pub fn ping(&self) -> Result<()> {
        let conn = self.conn.lock();
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(CoreError::database("ping"))?;
        Ok(())
    }

    pub fn counts(&self) -> Result<StoreCounts> {
        let conn = self.conn.lock();
        let (tasks, public_tasks, owners) = conn
            .query_row(
                "SELECT COUNT(*), COALESCE(SUM(public), 0), COUNT(DISTINCT user) FROM tasks",
                [],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?, row.get::<_, i64>(2)?)),
            )
            .map_err(CoreError::database("count tasks"))?;
        let comments = conn
            .query_row("SELECT COUNT(*) FROM comments", [], |row| row.get::<_, i64>(0))
            .map_err(CoreError::database("count comments"))?;

        Ok(StoreCounts {
            tasks: tasks as u64,
            public_tasks: public_tasks as u64,
            comments: comments as u64,
            owners: owners as u64,
        })
    }
}

/// Store-generated document identifier
fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Current time at the precision the store keeps
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Decode the `created_ms` column at `idx`; out-of-range values are a read error
fn from_millis(idx: usize, ms: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Integer,
            format!("timestamp out of range: {} ms", ms).into(),
        )
    })
}

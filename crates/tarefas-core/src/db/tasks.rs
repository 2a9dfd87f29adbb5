//! `tasks` collection

use super::{from_millis, generate_id, now, DocumentStore};
use crate::error::{CoreError, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tarefas_types::{NewTask, Task};

const TASK_COLUMNS: &str = "id, user, content, created_ms, public";

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        user: row.get(1)?,
        content: row.get(2)?,
        created: from_millis(3, row.get(3)?)?,
        public: row.get(4)?,
    })
}

impl DocumentStore {
    /// Store a task stamped with the current time
    pub fn insert_task(&self, new: NewTask) -> Result<Task> {
        self.insert_task_at(new, now())
    }

    /// Store a task with an explicit creation time
    pub fn insert_task_at(&self, new: NewTask, created: DateTime<Utc>) -> Result<Task> {
        let task = Task {
            id: generate_id(),
            user: new.user,
            content: new.content,
            created,
            public: new.public,
        };

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO tasks (id, user, content, created_ms, public) VALUES (?, ?, ?, ?, ?)",
            params![
                task.id,
                task.user,
                task.content,
                task.created.timestamp_millis(),
                task.public
            ],
        )
        .map_err(CoreError::database("insert task"))?;

        Ok(task)
    }

    pub fn get_task(&self, id: &str) -> Result<Option<Task>> {
        let conn = self.conn.lock();
        conn.query_row(
            &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?"),
            params![id],
            task_from_row,
        )
        .optional()
        .map_err(CoreError::database("get task"))
    }

    /// Tasks owned by `email`, newest first
    pub fn tasks_by_owner(&self, email: &str) -> Result<Vec<Task>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {TASK_COLUMNS} FROM tasks WHERE user = ? \
                 ORDER BY created_ms DESC, rowid DESC"
            ))
            .map_err(CoreError::database("prepare task query"))?;

        let tasks = stmt
            .query_map(params![email], task_from_row)
            .map_err(CoreError::database("query tasks"))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(CoreError::database("read task row"))?;

        Ok(tasks)
    }

    /// Returns true when a row was removed
    pub fn delete_task(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock();
        let removed = conn
            .execute("DELETE FROM tasks WHERE id = ?", params![id])
            .map_err(CoreError::database("delete task"))?;
        Ok(removed > 0)
    }
}

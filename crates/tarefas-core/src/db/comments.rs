//! `comments` collection

use super::{from_millis, generate_id, now, DocumentStore};
use crate::error::{CoreError, Result};
use rusqlite::{params, OptionalExtension, Row};
use tarefas_types::{Comment, NewComment};

const COMMENT_COLUMNS: &str = "id, task_id, content, user, name, created_ms";

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        task_id: row.get(1)?,
        content: row.get(2)?,
        user: row.get(3)?,
        name: row.get(4)?,
        created: from_millis(5, row.get(5)?)?,
    })
}

impl DocumentStore {
    pub fn insert_comment(&self, new: NewComment) -> Result<Comment> {
        let comment = Comment {
            id: generate_id(),
            task_id: new.task_id,
            content: new.content,
            user: new.user,
            name: new.name,
            created: now(),
        };

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO comments (id, task_id, content, user, name, created_ms) \
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                comment.id,
                comment.task_id,
                comment.content,
                comment.user,
                comment.name,
                comment.created.timestamp_millis()
            ],
        )
        .map_err(CoreError::database("insert comment"))?;

        Ok(comment)
    }

    pub fn get_comment(&self, id: &str) -> Result<Option<Comment>> {
        let conn = self.conn.lock();
        conn.query_row(
            &format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = ?"),
            params![id],
            comment_from_row,
        )
        .optional()
        .map_err(CoreError::database("get comment"))
    }

    /// Comments on a task in the order they were written
    pub fn comments_for_task(&self, task_id: &str) -> Result<Vec<Comment>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {COMMENT_COLUMNS} FROM comments WHERE task_id = ? \
                 ORDER BY created_ms ASC, rowid ASC"
            ))
            .map_err(CoreError::database("prepare comment query"))?;

        let comments = stmt
            .query_map(params![task_id], comment_from_row)
            .map_err(CoreError::database("query comments"))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(CoreError::database("read comment row"))?;

        Ok(comments)
    }

    pub fn delete_comment(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock();
        let removed = conn
            .execute("DELETE FROM comments WHERE id = ?", params![id])
            .map_err(CoreError::database("delete comment"))?;
        Ok(removed > 0)
    }
}

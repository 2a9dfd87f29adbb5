//! Data store facade
//!
//! Everything the pages and the API do goes through [`DataStore`]: document
//! writes with their ownership checks, the live task query, and sessions.

use crate::config::StoreConfig;
use crate::db::{DocumentStore, StoreCounts};
use crate::error::{CoreError, DegradedState, Result};
use crate::event::{DataEvent, EventBus};
use crate::live::TaskSubscription;
use crate::session::SessionStore;
use std::path::Path;
use std::sync::Arc;
use tarefas_types::{Comment, NewComment, NewTask, Task, TaskDetail, UserIdentity};
use tracing::{debug, info, warn};

/// Central data store for Tarefas+
pub struct DataStore {
    /// Tasks and comments
    db: Arc<DocumentStore>,

    /// Signed-in users
    sessions: SessionStore,

    /// Event bus for live queries and SSE
    event_bus: EventBus,

    config: StoreConfig,
}

impl DataStore {
    pub fn new(db: DocumentStore, config: StoreConfig) -> Self {
        let sessions = SessionStore::new(config.session_ttl, config.session_capacity);
        let event_bus = EventBus::new(config.event_capacity);

        Self {
            db: Arc::new(db),
            sessions,
            event_bus,
            config,
        }
    }

    /// Open the database file and build a store around it
    pub fn open(path: &Path, config: StoreConfig) -> Result<Self> {
        let db = DocumentStore::open(path)?;
        info!(path = %path.display(), "Data store ready");
        Ok(Self::new(db, config))
    }

    /// In-memory database with default configuration
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(
            DocumentStore::open_in_memory()?,
            StoreConfig::default(),
        ))
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn database(&self) -> &DocumentStore {
        &self.db
    }

    pub fn degraded_state(&self) -> DegradedState {
        match self.db.ping() {
            Ok(()) => DegradedState::Healthy,
            Err(e) => DegradedState::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    pub fn counts(&self) -> Result<StoreCounts> {
        self.db.counts()
    }

    // ===================
    // Tasks
    // ===================

    pub fn create_task(&self, user: &UserIdentity, content: &str, public: bool) -> Result<Task> {
        let content = non_empty(content)?;

        let task = self.db.insert_task(NewTask {
            user: user.email.clone(),
            content: content.to_string(),
            public,
        })?;

        info!(task_id = %task.id, user = %task.user, public, "Task created");
        self.event_bus.publish(DataEvent::TaskCreated {
            task_id: task.id.clone(),
            owner: task.user.clone(),
        });

        Ok(task)
    }

    /// Tasks owned by `owner`, newest first
    pub fn list_tasks(&self, owner: &str) -> Result<Vec<Task>> {
        self.db.tasks_by_owner(owner)
    }

    /// Only the owner may delete. Comments on the task are left in place.
    pub fn delete_task(&self, user: &UserIdentity, task_id: &str) -> Result<()> {
        let task = self.require_task(task_id)?;
        if !task.is_owned_by(&user.email) {
            return Err(CoreError::Forbidden {
                user: user.email.clone(),
                action: "delete this task",
            });
        }

        if !self.db.delete_task(task_id)? {
            // Deleted concurrently between the read and the delete
            return Err(CoreError::TaskNotFound {
                task_id: task_id.to_string(),
            });
        }

        info!(task_id, user = %user.email, "Task deleted");
        self.event_bus.publish(DataEvent::TaskDeleted {
            task_id: task_id.to_string(),
            owner: task.user,
        });

        Ok(())
    }

    /// Public view of a task plus its comments
    ///
    /// Missing and private tasks both fail; visitors must not learn which.
    pub fn task_detail(&self, task_id: &str) -> Result<(TaskDetail, Vec<Comment>)> {
        let task = self.require_public_task(task_id)?;
        let comments = self.db.comments_for_task(task_id)?;
        debug!(task_id, comments = comments.len(), "Task detail loaded");
        Ok((task.to_detail(), comments))
    }

    /// Share link for a public task owned by `user`
    pub fn share_link(&self, user: &UserIdentity, task_id: &str) -> Result<String> {
        let task = self.require_task(task_id)?;
        if !task.is_owned_by(&user.email) {
            return Err(CoreError::Forbidden {
                user: user.email.clone(),
                action: "share this task",
            });
        }
        if !task.public {
            return Err(CoreError::TaskNotPublic {
                task_id: task_id.to_string(),
            });
        }
        Ok(self.share_url(task_id))
    }

    /// `{public_url}/task/{id}`
    pub fn share_url(&self, task_id: &str) -> String {
        format!("{}/task/{}", self.config.public_url, task_id)
    }

    /// Live query over `owner`'s tasks
    pub fn watch_tasks(&self, owner: &str) -> TaskSubscription {
        TaskSubscription::new(
            owner.to_string(),
            Arc::clone(&self.db),
            self.event_bus.subscribe(),
        )
    }

    // ===================
    // Comments
    // ===================

    pub fn comments(&self, task_id: &str) -> Result<Vec<Comment>> {
        self.require_public_task(task_id)?;
        self.db.comments_for_task(task_id)
    }

    /// Commenting needs both an email and a display name
    pub fn add_comment(
        &self,
        user: &UserIdentity,
        task_id: &str,
        content: &str,
    ) -> Result<Comment> {
        if !user.is_complete() {
            return Err(CoreError::MissingIdentity);
        }
        let content = non_empty(content)?;
        self.require_public_task(task_id)?;

        let comment = self.db.insert_comment(NewComment {
            task_id: task_id.to_string(),
            content: content.to_string(),
            user: user.email.clone(),
            name: user.name.clone(),
        })?;

        info!(comment_id = %comment.id, task_id, user = %user.email, "Comment added");
        self.event_bus.publish(DataEvent::CommentAdded {
            comment_id: comment.id.clone(),
            task_id: task_id.to_string(),
        });

        Ok(comment)
    }

    /// Only the author may delete a comment
    pub fn delete_comment(&self, user: &UserIdentity, comment_id: &str) -> Result<Comment> {
        let comment = self.require_comment(comment_id)?;
        self.remove_comment(user, comment)
    }

    /// Like [`delete_comment`](Self::delete_comment), but the comment must
    /// belong to `task_id`
    pub fn delete_task_comment(
        &self,
        user: &UserIdentity,
        task_id: &str,
        comment_id: &str,
    ) -> Result<Comment> {
        let comment = self.require_comment(comment_id)?;
        if comment.task_id != task_id {
            warn!(
                comment_id,
                task_id,
                actual_task = %comment.task_id,
                "Comment is not on this task"
            );
            return Err(CoreError::CommentNotFound {
                comment_id: comment_id.to_string(),
            });
        }
        self.remove_comment(user, comment)
    }

    fn remove_comment(&self, user: &UserIdentity, comment: Comment) -> Result<Comment> {
        let comment_id = comment.id.as_str();

        if !comment.is_authored_by(&user.email) {
            return Err(CoreError::Forbidden {
                user: user.email.clone(),
                action: "delete this comment",
            });
        }

        if !self.db.delete_comment(comment_id)? {
            return Err(CoreError::CommentNotFound {
                comment_id: comment_id.to_string(),
            });
        }

        info!(comment_id, task_id = %comment.task_id, "Comment deleted");
        self.event_bus.publish(DataEvent::CommentDeleted {
            comment_id: comment_id.to_string(),
            task_id: comment.task_id.clone(),
        });

        Ok(comment)
    }

    fn require_comment(&self, comment_id: &str) -> Result<Comment> {
        self.db
            .get_comment(comment_id)?
            .ok_or_else(|| CoreError::CommentNotFound {
                comment_id: comment_id.to_string(),
            })
    }

    fn require_task(&self, task_id: &str) -> Result<Task> {
        self.db
            .get_task(task_id)?
            .ok_or_else(|| CoreError::TaskNotFound {
                task_id: task_id.to_string(),
            })
    }

    fn require_public_task(&self, task_id: &str) -> Result<Task> {
        let task = self.require_task(task_id)?;
        if !task.public {
            warn!(task_id, "Private task requested through public view");
            return Err(CoreError::TaskNotPublic {
                task_id: task_id.to_string(),
            });
        }
        Ok(task)
    }
}

/// Whitespace-only input counts as empty; stored text keeps its original form
fn non_empty(content: &str) -> Result<&str> {
    if content.trim().is_empty() {
        Err(CoreError::EmptyContent)
    } else {
        Ok(content)
    }
}

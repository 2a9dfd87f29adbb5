use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-authored note, private unless `public` is set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-generated identifier
    pub id: String,
    /// Owner email
    pub user: String,
    /// Free text
    #[serde(alias = "tarefa")]
    pub content: String,
    pub created: DateTime<Utc>,
    pub public: bool,
}

impl Task {
    /// Path of the detail page for this task
    pub fn detail_path(&self) -> String {
        format!("/task/{}", self.id)
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        self.user == email
    }

    /// Public projection shown on the detail page
    pub fn to_detail(&self) -> TaskDetail {
        TaskDetail {
            task_id: self.id.clone(),
            content: self.content.clone(),
            public: self.public,
            user: self.user.clone(),
            created: self.created.format(TaskDetail::DATE_FORMAT).to_string(),
        }
    }
}

/// Fields supplied by the client when creating a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub user: String,
    pub content: String,
    #[serde(default)]
    pub public: bool,
}

/// Public view of a task with its creation date already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    pub task_id: String,
    pub content: String,
    pub public: bool,
    pub user: String,
    /// `dd/mm/yyyy`
    pub created: String,
}

impl TaskDetail {
    pub const DATE_FORMAT: &'static str = "%d/%m/%Y";
}

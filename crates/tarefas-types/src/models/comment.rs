use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reply attached to a public task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub task_id: String,
    #[serde(alias = "comment")]
    pub content: String,
    /// Author email
    pub user: String,
    /// Author display name
    pub name: String,
    pub created: DateTime<Utc>,
}

impl Comment {
    pub fn is_authored_by(&self, email: &str) -> bool {
        self.user == email
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub task_id: String,
    pub content: String,
    pub user: String,
    pub name: String,
}

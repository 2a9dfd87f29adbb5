use serde::{Deserialize, Serialize};

/// Identity a session resolves to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
    pub name: String,
}

impl UserIdentity {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    /// Both email and display name are present (required to comment)
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.name.trim().is_empty()
    }

    /// Display name, falling back to the email when no name was given
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

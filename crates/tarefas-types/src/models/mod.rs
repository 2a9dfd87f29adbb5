//! Document shapes stored in the `tasks` and `comments` collections

pub mod comment;
pub mod task;
pub mod user;

pub use comment::{Comment, NewComment};
pub use task::{NewTask, Task, TaskDetail};
pub use user::UserIdentity;

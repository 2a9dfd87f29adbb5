//! Reusable view components

pub mod comment_card;
pub mod header;
pub mod task_card;
pub mod textarea;

pub use comment_card::CommentCard;
pub use header::Header;
pub use task_card::TaskCard;
pub use textarea::Textarea;

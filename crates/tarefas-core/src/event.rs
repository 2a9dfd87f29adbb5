//! Event bus for Tarefas+ using tokio::broadcast
//!
//! Every write to the document store publishes one event. Live task queries
//! and the SSE endpoint subscribe here.

use tokio::sync::broadcast;

/// Events emitted by the data layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataEvent {
    /// A task was stored
    TaskCreated { task_id: String, owner: String },
    /// A task was removed
    TaskDeleted { task_id: String, owner: String },
    /// A comment was added to a task
    CommentAdded { comment_id: String, task_id: String },
    /// A comment was removed
    CommentDeleted { comment_id: String, task_id: String },
}

impl DataEvent {
    /// Owner of the task list this event changes, if any
    pub fn owner(&self) -> Option<&str> {
        match self {
            DataEvent::TaskCreated { owner, .. } | DataEvent::TaskDeleted { owner, .. } => {
                Some(owner)
            }
            DataEvent::CommentAdded { .. } | DataEvent::CommentDeleted { .. } => None,
        }
    }

    /// Task this event concerns
    pub fn task_id(&self) -> &str {
        match self {
            DataEvent::TaskCreated { task_id, .. }
            | DataEvent::TaskDeleted { task_id, .. }
            | DataEvent::CommentAdded { task_id, .. }
            | DataEvent::CommentDeleted { task_id, .. } => task_id,
        }
    }

    /// Event name used on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            DataEvent::TaskCreated { .. } => "task_created",
            DataEvent::TaskDeleted { .. } => "task_deleted",
            DataEvent::CommentAdded { .. } => "comment_added",
            DataEvent::CommentDeleted { .. } => "comment_deleted",
        }
    }
}

/// Event bus for broadcasting data events
///
/// Uses tokio::broadcast for multi-consumer support.
pub struct EventBus {
    sender: broadcast::Sender<DataEvent>,
}

impl EventBus {
    /// Create a new event bus with specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Create with default capacity (256 events)
    pub fn default_capacity() -> Self {
        Self::new(256)
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: DataEvent) {
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }

    /// Subscribe to receive events
    pub fn subscribe(&self) -> broadcast::Receiver<DataEvent> {
        self.sender.subscribe()
    }

    /// Get current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::default_capacity()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

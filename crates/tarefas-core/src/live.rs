//! Live task query
//!
//! A subscription to "tasks owned by X, newest first". The first poll yields
//! the current list; after that every event touching X's tasks yields a fresh
//! full list. Consumers replace their local list with each snapshot.

use crate::db::DocumentStore;
use crate::error::Result;
use crate::event::DataEvent;
use futures::stream::{self, Stream};
use std::sync::Arc;
use tarefas_types::Task;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

pub struct TaskSubscription {
    owner: String,
    db: Arc<DocumentStore>,
    rx: broadcast::Receiver<DataEvent>,
    initial_sent: bool,
}

impl TaskSubscription {
    /// `rx` must be subscribed before the first snapshot is taken so no write
    /// falls between the two
    pub(crate) fn new(
        owner: String,
        db: Arc<DocumentStore>,
        rx: broadcast::Receiver<DataEvent>,
    ) -> Self {
        Self {
            owner,
            db,
            rx,
            initial_sent: false,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Next full snapshot, `None` once the event bus is gone
    pub async fn next_snapshot(&mut self) -> Option<Result<Vec<Task>>> {
        if !self.initial_sent {
            self.initial_sent = true;
            return Some(self.snapshot());
        }

        loop {
            match self.rx.recv().await {
                Ok(event) if event.owner() == Some(self.owner.as_str()) => {
                    debug!(owner = %self.owner, kind = event.kind(), "Task list changed");
                    return Some(self.snapshot());
                }
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    // Missed events may have touched this list; resync
                    warn!(owner = %self.owner, skipped, "Task subscription lagged");
                    return Some(self.snapshot());
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Adapt into a stream of snapshots
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<Task>>> + Send + 'static {
        stream::unfold(self, |mut sub| async move {
            sub.next_snapshot().await.map(|snapshot| (snapshot, sub))
        })
    }

    fn snapshot(&self) -> Result<Vec<Task>> {
        self.db.tasks_by_owner(&self.owner)
    }
}

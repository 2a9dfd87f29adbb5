//! Server-Sent Events for the live task list

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;
use tarefas_core::{DataStore, TaskSubscription};
use tarefas_types::Task;
use tokio_stream::StreamExt;
use tracing::warn;

/// A task as pushed to the dashboard, with its share link when public
#[derive(Debug, Serialize)]
pub struct LiveTask<'a> {
    #[serde(flatten)]
    pub task: &'a Task,
    #[serde(rename = "shareUrl", skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
}

/// JSON payload of one `tasks` event
pub fn encode_snapshot(store: &DataStore, tasks: &[Task]) -> serde_json::Result<String> {
    let items: Vec<LiveTask<'_>> = tasks
        .iter()
        .map(|task| LiveTask {
            task,
            share_url: task.public.then(|| store.share_url(&task.id)),
        })
        .collect();
    serde_json::to_string(&items)
}

/// One `tasks` event per snapshot, carrying the owner's full list as JSON
pub fn create_sse_stream(
    store: Arc<DataStore>,
    subscription: TaskSubscription,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let owner = subscription.owner().to_string();

    let sse_stream = subscription.into_stream().filter_map(move |snapshot| {
        let tasks = match snapshot {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(owner = %owner, error = %e, "Failed to refresh task list");
                return None;
            }
        };

        match encode_snapshot(&store, &tasks) {
            Ok(data) => Some(Ok(Event::default().event("tasks").data(data))),
            Err(e) => {
                warn!(error = %e, "Failed to encode task list");
                None
            }
        }
    });

    Sse::new(sse_stream).keep_alive(KeepAlive::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarefas_core::{DocumentStore, StoreConfig};
    use tarefas_types::UserIdentity;

    #[test]
    fn test_snapshot_carries_share_url_for_public_tasks() {
        let store = DataStore::new(
            DocumentStore::open_in_memory().unwrap(),
            StoreConfig {
                public_url: "https://tarefas.example.com".to_string(),
                ..StoreConfig::default()
            },
        );
        let ana = UserIdentity::new("ana@example.com", "Ana");
        let public = store.create_task(&ana, "Pública", true).unwrap();
        let private = store.create_task(&ana, "Privada", false).unwrap();

        let data = encode_snapshot(&store, &[public.clone(), private]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&data).unwrap();

        assert_eq!(value[0]["id"], public.id.as_str());
        assert_eq!(value[0]["content"], "Pública");
        assert_eq!(
            value[0]["shareUrl"],
            format!("https://tarefas.example.com/task/{}", public.id)
        );
        assert!(value[1].get("shareUrl").is_none());
    }
}

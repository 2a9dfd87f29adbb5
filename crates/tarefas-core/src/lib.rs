//! tarefas-core - Core library for Tarefas+
//!
//! Provides the document store, live task queries, sessions and configuration
//! behind the web application.

pub mod config;
pub mod db;
pub mod error;
pub mod event;
pub mod live;
pub mod session;
pub mod store;

pub use config::{AppConfig, StoreConfig};
pub use db::{DocumentStore, StoreCounts};
pub use error::{CoreError, DegradedState, Result};
pub use event::{DataEvent, EventBus};
pub use live::TaskSubscription;
pub use session::{SessionStore, SessionToken};
pub use store::DataStore;

pub use tarefas_types as types;

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::error::Result;
use crate::models::{NewTask, Task, TaskPatch};

/// A single row change reported by the store's notification feed.
///
/// The feed carries no row payload; consumers converge by re-reading the
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    Insert,
    Update,
    Delete,
}

pub type ChangeFeed = Pin<Box<dyn Stream<Item = Result<ChangeEvent>> + Send>>;

/// Contract against the durable task store.
///
/// Implementations provide backend-specific CRUD plus a change-notification
/// feed covering writes from every connected client.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All tasks, ordered by `position` ascending.
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Insert a task and return the created record with store-assigned id
    /// and timestamps.
    async fn insert_task(&self, new_task: NewTask) -> Result<Task>;

    /// Apply a partial update to the task with the given id.
    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<()>;

    /// Delete the task with the given id.
    async fn delete_task(&self, id: &str) -> Result<()>;

    /// Subscribe to row changes on the task collection (all event types,
    /// all writers, this client's own writes included).
    async fn watch(&self) -> Result<ChangeFeed>;
}

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use taskdeck_store::{NewTask, Task, TaskPatch, TaskStatus, TaskStore};

use crate::notify::{LogNotify, Notify};

struct BoardState {
    tasks: Vec<Task>,
    loading: bool,
}

/// Optimistic synchronization engine for the task board.
///
/// Owns the provisional in-memory copy of the task list and reconciles it
/// against the durable store. Mutations to already-known records apply
/// locally before the store confirms; creation and deletion wait for
/// confirmation because their outcome depends on the store. Any failed
/// write degrades to a notification plus a defined recovery action, with a
/// full reload (`refresh`) as the generic convergence point.
pub struct TaskBoard {
    store: Arc<dyn TaskStore>,
    notify: Arc<dyn Notify>,
    state: RwLock<BoardState>,
}

pub struct TaskBoardBuilder {
    store: Arc<dyn TaskStore>,
    notify: Arc<dyn Notify>,
}

impl TaskBoardBuilder {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            notify: Arc::new(LogNotify),
        }
    }

    pub fn notify(mut self, notify: Arc<dyn Notify>) -> Self {
        self.notify = notify;
        self
    }

    pub fn build(self) -> Arc<TaskBoard> {
        Arc::new(TaskBoard {
            store: self.store,
            notify: self.notify,
            state: RwLock::new(BoardState {
                tasks: Vec::new(),
                loading: true,
            }),
        })
    }
}

impl TaskBoard {
    pub fn builder(store: Arc<dyn TaskStore>) -> TaskBoardBuilder {
        TaskBoardBuilder::new(store)
    }

    /// Snapshot of the current task list.
    pub async fn tasks(&self) -> Vec<Task> {
        self.state.read().await.tasks.clone()
    }

    /// True until the first load attempt completes, success or failure.
    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub(crate) fn store(&self) -> &Arc<dyn TaskStore> {
        &self.store
    }

    /// Reload the full task set from the store, replacing local state
    /// wholesale. On failure the previous tasks are kept; `loading` is
    /// cleared either way.
    pub async fn refresh(&self) {
        match self.store.list_tasks().await {
            Ok(tasks) => {
                debug!("Loaded {} tasks", tasks.len());
                let mut state = self.state.write().await;
                state.tasks = tasks;
                state.loading = false;
            }
            Err(e) => {
                warn!("Error fetching tasks: {}", e);
                self.notify.error("Failed to load tasks");
                self.state.write().await.loading = false;
            }
        }
    }

    /// Create a task at the end of the given column.
    ///
    /// Confirm-then-apply: the record is only appended locally once the
    /// store returns it, since id and timestamps are store-assigned.
    pub async fn create_task(
        &self,
        title: &str,
        description: &str,
        status: TaskStatus,
    ) -> Option<Task> {
        let title = title.trim();
        if title.is_empty() {
            self.notify.error("Failed to create task");
            return None;
        }

        let position = {
            let state = self.state.read().await;
            next_position(&state.tasks, status)
        };

        let new_task = NewTask {
            title: title.to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            status,
            position,
        };

        match self.store.insert_task(new_task).await {
            Ok(task) => {
                self.state.write().await.tasks.push(task.clone());
                self.notify.success("Task created!");
                Some(task)
            }
            Err(e) => {
                warn!("Error creating task: {}", e);
                self.notify.error("Failed to create task");
                None
            }
        }
    }

    /// Merge a partial update into the task, optimistically, then persist.
    ///
    /// A failed write only notifies; the optimistic merge stands until the
    /// next reconciliation (change feed or explicit refresh).
    pub async fn update_task(&self, id: &str, patch: TaskPatch) {
        {
            let mut state = self.state.write().await;
            if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                patch.apply(task);
            }
        }

        if let Err(e) = self.store.update_task(id, patch).await {
            warn!("Error updating task: {}", e);
            self.notify.error("Failed to update task");
        }
    }

    /// Delete a task. Confirm-then-apply: local state changes only after
    /// the store accepts the delete.
    pub async fn delete_task(&self, id: &str) {
        match self.store.delete_task(id).await {
            Ok(()) => {
                self.state.write().await.tasks.retain(|t| t.id != id);
                self.notify.success("Task deleted");
            }
            Err(e) => {
                warn!("Error deleting task: {}", e);
                self.notify.error("Failed to delete task");
            }
        }
    }

    /// Move a task to a column position, optimistically.
    ///
    /// Only the moved task is touched; neighbors in the source and
    /// destination columns are not renumbered here (known limitation,
    /// reconciled by reload). Failure reverts via full refresh.
    pub async fn move_task(&self, id: &str, new_status: TaskStatus, new_position: i64) {
        let found = {
            let mut state = self.state.write().await;
            match state.tasks.iter_mut().find(|t| t.id == id) {
                Some(task) => {
                    task.status = new_status;
                    task.position = new_position;
                    true
                }
                None => false,
            }
        };
        if !found {
            return;
        }

        let patch = TaskPatch::move_to(new_status, new_position);
        if let Err(e) = self.store.update_task(id, patch).await {
            warn!("Error moving task: {}", e);
            self.notify.error("Failed to move task");
            self.refresh().await;
        }
    }

    /// Reposition one task within its column and renumber the column to a
    /// dense `0..N-1` range, optimistically. Store writes for the changed
    /// tasks go out one at a time, in ascending new-position order, so an
    /// interleaved reload observes a deterministic write sequence. Any
    /// failed write aborts the remainder and reverts via full refresh.
    pub async fn reorder_tasks(
        &self,
        status: TaskStatus,
        source_index: usize,
        destination_index: usize,
    ) {
        let updates: Vec<(String, i64)> = {
            let mut state = self.state.write().await;

            let mut column: Vec<Task> = state
                .tasks
                .iter()
                .filter(|t| t.status == status)
                .cloned()
                .collect();
            column.sort_by_key(|t| t.position);

            if source_index >= column.len() {
                return;
            }
            let moved = column.remove(source_index);
            let destination_index = destination_index.min(column.len());
            column.insert(destination_index, moved);

            let mut updates = Vec::new();
            for (index, task) in column.iter_mut().enumerate() {
                let position = index as i64;
                if task.position != position {
                    updates.push((task.id.clone(), position));
                }
                task.position = position;
            }

            state.tasks.retain(|t| t.status != status);
            state.tasks.extend(column);
            updates
        };

        for (id, position) in updates {
            if let Err(e) = self.store.update_task(&id, TaskPatch::position(position)).await {
                warn!("Error reordering tasks: {}", e);
                self.notify.error("Failed to reorder tasks");
                self.refresh().await;
                return;
            }
        }
    }
}

fn next_position(tasks: &[Task], status: TaskStatus) -> i64 {
    tasks
        .iter()
        .filter(|t| t.status == status)
        .map(|t| t.position)
        .max()
        .map_or(0, |max| max + 1)
}

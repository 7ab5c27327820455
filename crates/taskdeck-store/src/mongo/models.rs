use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::{NewTask, Task, TaskStatus};

/// MongoDB-specific task model (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoTask {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MongoTask {
    /// Materialize an insert payload: the store assigns id and timestamps.
    /// Empty descriptions are normalized to absent, matching the board's
    /// "no description" display state.
    pub fn from_new(new_task: NewTask) -> Self {
        let now = Utc::now();
        Self {
            id: ObjectId::new(),
            title: new_task.title,
            description: new_task.description.filter(|d| !d.is_empty()),
            status: new_task.status,
            position: new_task.position,
            created_at: now,
            updated_at: now,
        }
    }
}

// Conversion between the database-agnostic and MongoDB-specific models

impl From<MongoTask> for Task {
    fn from(task: MongoTask) -> Self {
        Self {
            id: task.id.to_hex(),
            title: task.title,
            description: task.description,
            status: task.status,
            position: task.position,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

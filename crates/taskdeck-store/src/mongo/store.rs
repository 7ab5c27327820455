use async_trait::async_trait;
use chrono::Utc;
use futures::{StreamExt, TryStreamExt};
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::change_stream::event::OperationType;
use mongodb::{Client, Collection};
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::models::{NewTask, Task, TaskPatch};
use crate::mongo::models::MongoTask;
use crate::trait_client::{ChangeEvent, ChangeFeed, TaskStore};

/// MongoDB-backed task store. The change feed rides on a collection
/// change stream, so it reports writes from every connected client.
pub struct MongoTaskStore {
    collection: Collection<MongoTask>,
}

impl MongoTaskStore {
    /// Connect to MongoDB and create the store
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self::new(&client, database))
    }

    pub async fn from_config(config: &StoreConfig) -> Result<Self> {
        Self::connect(&config.mongodb_uri, &config.database).await
    }

    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("tasks");
        Self { collection }
    }

    fn parse_id(id: &str) -> Result<ObjectId> {
        ObjectId::parse_str(id).map_err(|e| StoreError::InvalidTaskId(e.to_string()))
    }

    fn set_document(patch: &TaskPatch) -> Result<Document> {
        let mut set = doc! { "updated_at": mongodb::bson::to_bson(&Utc::now())? };
        if let Some(title) = &patch.title {
            set.insert("title", title.as_str());
        }
        if let Some(description) = &patch.description {
            if description.is_empty() {
                set.insert("description", Bson::Null);
            } else {
                set.insert("description", description.as_str());
            }
        }
        if let Some(status) = &patch.status {
            set.insert("status", mongodb::bson::to_bson(status)?);
        }
        if let Some(position) = patch.position {
            set.insert("position", position);
        }
        Ok(set)
    }
}

#[async_trait]
impl TaskStore for MongoTaskStore {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let tasks: Vec<MongoTask> = self
            .collection
            .find(doc! {})
            .sort(doc! { "position": 1 })
            .await?
            .try_collect()
            .await?;

        Ok(tasks.into_iter().map(Into::into).collect())
    }

    async fn insert_task(&self, new_task: NewTask) -> Result<Task> {
        let task = MongoTask::from_new(new_task);
        self.collection.insert_one(&task).await?;
        debug!("Inserted task {}", task.id.to_hex());
        Ok(task.into())
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<()> {
        let object_id = Self::parse_id(id)?;
        let set = Self::set_document(&patch)?;

        let result = self
            .collection
            .update_one(doc! { "_id": object_id }, doc! { "$set": set })
            .await?;

        if result.matched_count == 0 {
            return Err(StoreError::TaskNotFound(id.to_string()));
        }
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        let object_id = Self::parse_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": object_id }).await?;

        if result.deleted_count == 0 {
            return Err(StoreError::TaskNotFound(id.to_string()));
        }
        Ok(())
    }

    async fn watch(&self) -> Result<ChangeFeed> {
        let stream = self.collection.watch().await?;

        Ok(Box::pin(stream.filter_map(|event| async move {
            match event {
                Ok(event) => match event.operation_type {
                    OperationType::Insert => Some(Ok(ChangeEvent::Insert)),
                    OperationType::Update | OperationType::Replace => {
                        Some(Ok(ChangeEvent::Update))
                    }
                    OperationType::Delete => Some(Ok(ChangeEvent::Delete)),
                    _ => None,
                },
                Err(e) => Some(Err(StoreError::Database(e))),
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    #[test]
    fn test_set_document_includes_only_patched_fields() {
        let patch = TaskPatch::move_to(TaskStatus::Complete, 2);
        let set = MongoTaskStore::set_document(&patch).unwrap();

        assert_eq!(set.get_str("status").unwrap(), "complete");
        assert_eq!(set.get_i64("position").unwrap(), 2);
        assert!(set.contains_key("updated_at"));
        assert!(!set.contains_key("title"));
        assert!(!set.contains_key("description"));
    }

    #[test]
    fn test_set_document_nulls_empty_description() {
        let patch = TaskPatch {
            description: Some(String::new()),
            ..Default::default()
        };
        let set = MongoTaskStore::set_document(&patch).unwrap();
        assert_eq!(set.get("description"), Some(&Bson::Null));
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(matches!(
            MongoTaskStore::parse_id("not-an-object-id"),
            Err(StoreError::InvalidTaskId(_))
        ));
    }
}

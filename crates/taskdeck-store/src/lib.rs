pub mod config;
pub mod error;
pub mod models;
pub mod trait_client;

#[cfg(feature = "mongodb")]
pub mod mongo;

pub use config::StoreConfig;
pub use error::StoreError;
pub use models::{Column, ColumnColor, NewTask, Task, TaskPatch, TaskStatus, COLUMNS};
pub use trait_client::{ChangeEvent, ChangeFeed, TaskStore};

#[cfg(feature = "mongodb")]
pub use mongo::MongoTaskStore;

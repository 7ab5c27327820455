//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use taskdeck::prelude::*;
//! ```

pub use crate::{
    ChangeEvent, ChangeFeedHandle, ChatBackend, ChatClient, ChatConfig, ChatMessage, ChatRole,
    ChatSession, Column, NewTask, Notify, StoreError, StreamEvent, Task, TaskBoard,
    TaskBoardBuilder, TaskPatch, TaskStatus, TaskStore, COLUMNS,
};

#[cfg(feature = "mongodb")]
pub use crate::MongoTaskStore;

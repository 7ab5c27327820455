//! # Taskdeck
//!
//! Client-side engine for a kanban-style task board: an optimistic
//! synchronization layer over a durable task store, plus a streaming chat
//! assembler for the board's AI assistant panel.
//!
//! ## Overview
//!
//! - **Synchronize** a local task list against a remote store, applying
//!   mutations optimistically and reconverging with a full reload on
//!   failure or on any change-feed event
//! - **Reorder and move** tasks across the three fixed columns while
//!   keeping a dense per-column position order
//! - **Stream** assistant replies token-by-token from an SSE endpoint,
//!   resilient to records split across network reads
//!
//! ## Quick Start
//!
//! Requires the `mongodb` feature:
//!
//! ```rust,ignore
//! use taskdeck::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(
//!         MongoTaskStore::connect("mongodb://localhost:27017", "taskdeck").await?,
//!     );
//!
//!     let board = TaskBoard::builder(store).build();
//!     let _feed = ChangeFeedHandle::spawn(&board).await;
//!
//!     board.create_task("Buy milk", "", TaskStatus::Todo).await;
//!     for task in board.tasks().await {
//!         println!("[{}] {}", task.status.as_str(), task.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Taskdeck is organized into focused crates:
//!
//! - **`taskdeck-store`**: task model and store contract, with a MongoDB
//!   change-stream backend
//! - **`taskdeck-board`**: optimistic synchronization engine
//! - **`taskdeck-chat`**: streaming chat client and SSE assembler
//!
//! ## License
//!
//! MIT

pub mod prelude;

pub use taskdeck_store::{
    ChangeEvent, ChangeFeed, Column, ColumnColor, NewTask, StoreConfig, StoreError, Task,
    TaskPatch, TaskStatus, TaskStore, COLUMNS,
};

#[cfg(feature = "mongodb")]
pub use taskdeck_store::MongoTaskStore;

pub use taskdeck_board::{ChangeFeedHandle, LogNotify, Notify, TaskBoard, TaskBoardBuilder};

pub use taskdeck_chat::{
    ChatBackend, ChatClient, ChatConfig, ChatMessage, ChatRole, ChatSession, LineBuffer,
    StreamEvent,
};

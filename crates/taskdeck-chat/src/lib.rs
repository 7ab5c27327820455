pub mod buffering;
pub mod client;
pub mod config;
pub mod session;
pub mod streaming;
pub mod types;

pub use buffering::LineBuffer;
pub use client::{ChatBackend, ChatClient, EventStream};
pub use config::ChatConfig;
pub use session::ChatSession;
pub use streaming::{parse_sse_bytes, parse_sse_stream, ChatChunk, StreamEvent};
pub use types::{ChatMessage, ChatRole};

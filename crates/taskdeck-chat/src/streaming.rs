use std::pin::Pin;

use anyhow::Result;
use futures::{Stream, StreamExt};
use reqwest::Response;
use serde::Deserialize;

use crate::buffering::LineBuffer;

/// Incremental output of the stream assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// One fragment of assistant text.
    Token { content: String },
    /// The `[DONE]` sentinel was seen. Fragment emission stops, but the
    /// underlying channel is drained until it closes on its own.
    Done,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: ChunkDelta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChunkDelta {
    pub content: Option<String>,
}

impl ChatChunk {
    pub fn content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.delta.content.as_deref())
    }
}

/// Parse an SSE response body into stream events.
pub fn parse_sse_stream(
    response: Response,
) -> Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>> {
    parse_sse_bytes(response.bytes_stream())
}

/// Core SSE loop, generic over the byte source so chunk-boundary behavior
/// is testable without a live connection.
///
/// Framing rules: comment (`:`) and blank lines are skipped; only
/// `data: `-prefixed lines carry payload; a payload that fails to parse as
/// JSON is treated as a record truncated by a chunk boundary and is pushed
/// back to await more bytes, never surfaced as an error.
pub fn parse_sse_bytes<S, B, E>(bytes: S) -> Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>
where
    S: Stream<Item = std::result::Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut chunks = Box::pin(bytes);
        let mut buffer = LineBuffer::with_capacity(4096);
        let mut done = false;

        while let Some(chunk_result) = chunks.next().await {
            match chunk_result {
                Ok(chunk) => {
                    buffer.extend(chunk.as_ref());

                    while let Some(line) = buffer.next_line() {
                        if line.starts_with(':') || line.trim().is_empty() {
                            continue;
                        }
                        let Some(data) = line.strip_prefix("data: ") else {
                            continue;
                        };
                        let data = data.trim();

                        if data == "[DONE]" {
                            if !done {
                                done = true;
                                yield Ok(StreamEvent::Done);
                            }
                            continue;
                        }
                        if done {
                            continue;
                        }

                        match serde_json::from_str::<ChatChunk>(data) {
                            Ok(chunk) => {
                                if let Some(content) = chunk.content() {
                                    if !content.is_empty() {
                                        yield Ok(StreamEvent::Token {
                                            content: content.to_string(),
                                        });
                                    }
                                }
                            }
                            Err(_) => {
                                // A record split across reads parses as
                                // broken JSON. Put the line back and wait
                                // for the rest of it.
                                buffer.push_back_line(&line);
                                break;
                            }
                        }
                    }
                }
                Err(e) => {
                    yield Err(anyhow::anyhow!("Stream error: {}", e));
                    return;
                }
            }
        }

        if !buffer.is_empty() {
            tracing::debug!(bytes = buffer.len(), "stream closed with unterminated record");
        }
    })
}

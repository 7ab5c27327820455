use anyhow::Result;
use futures::StreamExt;

use crate::client::ChatBackend;
use crate::streaming::StreamEvent;
use crate::types::{ChatMessage, ChatRole};

/// Chat transcript plus the fold that grows the trailing assistant message
/// as fragments stream in.
///
/// The transcript lives as long as the session; it is never reset between
/// sends. On a failed stream the fragments already applied stay in place.
pub struct ChatSession<B: ChatBackend> {
    backend: B,
    messages: Vec<ChatMessage>,
}

impl<B: ChatBackend> ChatSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            messages: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the user's input and stream the assistant reply into the
    /// transcript. Blank input is ignored.
    pub async fn send(&mut self, input: &str) -> Result<()> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }
        self.messages.push(ChatMessage::user(input));

        let mut events = self.backend.stream_chat(&self.messages).await?;
        let mut assistant_content = String::new();

        while let Some(event) = events.next().await {
            match event? {
                StreamEvent::Token { content } => {
                    assistant_content.push_str(&content);
                    self.apply_fragment(&assistant_content);
                }
                // Keep draining until the channel closes on its own.
                StreamEvent::Done => {}
            }
        }

        Ok(())
    }

    fn apply_fragment(&mut self, accumulated: &str) {
        match self.messages.last_mut() {
            Some(last) if last.role == ChatRole::Assistant => {
                last.content = accumulated.to_string();
            }
            _ => self.messages.push(ChatMessage::assistant(accumulated)),
        }
    }
}

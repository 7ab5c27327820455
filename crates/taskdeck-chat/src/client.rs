use std::pin::Pin;

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::Stream;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use tracing::debug;

use crate::config::ChatConfig;
use crate::streaming::{parse_sse_stream, StreamEvent};
use crate::types::ChatMessage;

pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>;

/// Transport seam for the chat endpoint, so the session assembler can be
/// exercised against a scripted backend.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send the full conversation history and stream the reply.
    async fn stream_chat(&self, messages: &[ChatMessage]) -> Result<EventStream>;
}

/// HTTP client for the streaming chat endpoint (direct, no SDK).
pub struct ChatClient {
    http_client: reqwest::Client,
    chat_url: String,
}

impl ChatClient {
    /// Create new client with endpoint URL and bearer token
    pub fn new(chat_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .context("Invalid API key format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            chat_url: chat_url.into(),
        })
    }

    pub fn from_config(config: &ChatConfig) -> Result<Self> {
        Self::new(&config.chat_url, &config.api_key)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn stream_chat(&self, messages: &[ChatMessage]) -> Result<EventStream> {
        let payload = serde_json::json!({ "messages": messages });
        debug!("Sending {} messages to chat endpoint", messages.len());

        let response = self
            .http_client
            .post(&self.chat_url)
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let reason = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| "Failed to get response".to_string());
            anyhow::bail!("{}", reason);
        }

        Ok(parse_sse_stream(response))
    }
}

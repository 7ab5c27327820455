use anyhow::{Context, Result};

/// Chat endpoint settings, sourced from the environment.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub chat_url: String,
    pub api_key: String,
}

impl ChatConfig {
    /// Read `TASKDECK_CHAT_URL` and `TASKDECK_API_KEY` from the
    /// environment.
    pub fn from_env() -> Result<Self> {
        let chat_url = std::env::var("TASKDECK_CHAT_URL")
            .context("TASKDECK_CHAT_URL environment variable is required")?;
        let api_key = std::env::var("TASKDECK_API_KEY")
            .context("TASKDECK_API_KEY environment variable is required")?;

        Ok(Self { chat_url, api_key })
    }
}

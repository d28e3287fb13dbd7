//! Telegram Bot API delivery.
//!
//! Sends a single `sendMessage` call per inquiry. The text goes out as plain
//! text, so visitor input is never interpreted as markup.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::{InquiryNotifier, NotifyError};

/// Default Bot API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Telegram bot credentials and target chat.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    /// Bot API base URL without trailing slash.
    pub api_base: String,
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl TelegramConfig {
    /// Load from environment variables; `None` unless both credentials are set.
    ///
    /// | Env Var             | Default                     |
    /// |---------------------|-----------------------------|
    /// | `BOT_TOKEN`         | --                          |
    /// | `TELEGRAM_CHAT_ID`  | --                          |
    /// | `TELEGRAM_API_BASE` | `https://api.telegram.org`  |
    pub fn from_env() -> Option<Self> {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let bot_token = non_empty("BOT_TOKEN")?;
        let chat_id = non_empty("TELEGRAM_CHAT_ID")?;
        let api_base = non_empty("TELEGRAM_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into());

        Some(Self {
            bot_token,
            chat_id,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Full `sendMessage` endpoint URL.
    pub fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }
}

/// Request body of `sendMessage`.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Posts inquiries to a Telegram chat.
pub struct TelegramNotifier {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramNotifier {
    /// Create a notifier with a pre-configured HTTP client.
    pub fn new(config: TelegramConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl InquiryNotifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let body = SendMessage {
            chat_id: &self.config.chat_id,
            text,
        };

        // The request URL carries the bot token; keep it out of errors.
        let response = self
            .client
            .post(self.config.send_message_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.without_url()))?;

        if !response.status().is_success() {
            return Err(NotifyError::HttpStatus(response.status().as_u16()));
        }

        tracing::info!(chat_id = %self.config.chat_id, "Inquiry delivered to Telegram");
        Ok(())
    }
}

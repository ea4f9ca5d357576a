use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::TelegramConfig;
use crate::domain::Notification;
use crate::errors::{FeedwatchError, FeedwatchResult};
use crate::notify::traits::Notifier;

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends one message per article with a single GET to the Bot API.
pub struct TelegramNotifier {
    client: Client,
    api_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> FeedwatchResult<Self> {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| FeedwatchError::TelegramSend(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    /// Certificate validation failures get their own error kind; everything
    /// else on this channel is a plain send failure.
    fn classify(err: reqwest::Error) -> FeedwatchError {
        let mut source = std::error::Error::source(&err);
        while let Some(inner) = source {
            if inner.to_string().to_lowercase().contains("certificate") {
                return FeedwatchError::Certificate(err.to_string());
            }
            source = inner.source();
        }

        FeedwatchError::TelegramSend(err.to_string())
    }
}

impl Notifier for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn notify(&self, notification: &Notification) -> FeedwatchResult<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.bot_token);
        let text = notification.format();

        let response = self
            .client
            .get(&url)
            .query(&[("chat_id", self.chat_id.as_str()), ("text", text.as_str())])
            .send()
            .map_err(Self::classify)?;

        response.error_for_status().map_err(Self::classify)?;
        Ok(())
    }
}

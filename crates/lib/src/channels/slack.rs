//! Slack incoming-webhook channel: one JSON POST per message.

use crate::channels::outbound::OutboundMessage;

/// Outcome of one webhook POST. Any HTTP response counts as delivered,
/// including non-2xx; only transport failures are errors.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Slack webhook connector. The client is built once and reused across
/// invocations for the process lifetime.
pub struct SlackChannel {
    webhook_url: String,
    client: reqwest::Client,
}

impl SlackChannel {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// POST `{"text": <text>}` to the webhook URL. Returns status and body
    /// for any response the endpoint produces.
    pub async fn post_message(&self, text: &str) -> Result<Delivery, ChannelError> {
        let body = OutboundMessage::new(text);
        let res = self
            .client
            .post(&self.webhook_url)
            .json(&body)
            .send()
            .await?;
        let status_code = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        Ok(Delivery { status_code, body })
    }
}

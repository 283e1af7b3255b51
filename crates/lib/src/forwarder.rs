//! The forwarder: one event in, one webhook POST out, one log record.

use serde::Serialize;

use crate::channels::{ChannelError, SlackChannel};
use crate::config;
use crate::event::{EventError, NotificationEvent};

/// Host-provided invocation context.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub request_id: String,
}

impl InvocationContext {
    /// Context with a generated request id, for hosts that do not supply one.
    pub fn new() -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one invocation: the forwarded message plus the webhook response.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReport {
    pub message: String,
    pub status_code: u16,
    pub response: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("malformed event: {0}")]
    MalformedEvent(#[from] EventError),
    #[error("webhook URL not configured (set SLACK_WEBHOOK)")]
    MissingWebhook,
    #[error(transparent)]
    Transport(#[from] ChannelError),
}

/// Forwards notification events to a Slack webhook. Holds the channel (and
/// its HTTP client) so one instance can serve many invocations.
pub struct Forwarder {
    channel: SlackChannel,
}

impl Forwarder {
    pub fn new(channel: SlackChannel) -> Self {
        Self { channel }
    }

    /// Resolve the webhook URL from env/config and build a forwarder.
    /// Fails with `MissingWebhook` before any network call is attempted.
    pub fn from_config(config: &config::Config) -> Result<Self, ForwardError> {
        let url = config::resolve_slack_webhook(config).ok_or(ForwardError::MissingWebhook)?;
        Ok(Self::new(SlackChannel::new(url)))
    }

    /// Forward one event: extract the message, POST it, log the outcome.
    /// Exactly one outbound call per invocation; no retries, no queueing.
    pub async fn handle(
        &self,
        event: &NotificationEvent,
        ctx: &InvocationContext,
    ) -> Result<DeliveryReport, ForwardError> {
        let message = event.message()?.to_string();
        let delivery = self.channel.post_message(&message).await?;
        let report = DeliveryReport {
            message,
            status_code: delivery.status_code,
            response: delivery.body,
        };
        log::info!(
            "request {}: {}",
            ctx.request_id,
            serde_json::json!({
                "message": report.message,
                "status_code": report.status_code,
                "response": report.response,
            })
        );
        Ok(report)
    }
}

//! Outbound message posted to the webhook: `{"text": <message>}`.

use serde::Serialize;

/// JSON body of one webhook POST. Built fresh per invocation and discarded
/// after the request completes.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage {
    pub text: String,
}

impl OutboundMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_bare_text_object() {
        let msg = OutboundMessage::new("hello");
        assert_eq!(
            serde_json::to_string(&msg).expect("serialize"),
            r#"{"text":"hello"}"#
        );
    }

    #[test]
    fn text_is_json_escaped() {
        let msg = OutboundMessage::new("line1\nline2 \"quoted\"");
        assert_eq!(
            serde_json::to_string(&msg).expect("serialize"),
            r#"{"text":"line1\nline2 \"quoted\""}"#
        );
    }
}

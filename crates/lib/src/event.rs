//! Typed schema for the inbound notification event.
//!
//! The pub/sub platform delivers `{"Records": [{"Sns": {"Message": ...}}]}`.
//! Parsing is strict at the boundary: a shape mismatch is a malformed-input
//! error raised before any network call is made.

use serde::Deserialize;

/// One notification event as delivered by the hosting platform. Read-only;
/// the forwarder never mutates it.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

/// A single record in the event envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsPayload,
    #[serde(rename = "EventSource", default)]
    pub event_source: Option<String>,
}

/// SNS payload: the message text plus optional delivery metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct SnsPayload {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Subject", default)]
    pub subject: Option<String>,
    #[serde(rename = "MessageId", default)]
    pub message_id: Option<String>,
    #[serde(rename = "TopicArn", default)]
    pub topic_arn: Option<String>,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("event contains no records")]
    NoRecords,
}

impl NotificationEvent {
    /// Parse an event from its JSON form.
    pub fn from_json(s: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Message text of the first record. Later records are ignored.
    pub fn message(&self) -> Result<&str, EventError> {
        self.records
            .first()
            .map(|r| r.sns.message.as_str())
            .ok_or(EventError::NoRecords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sns_event_and_extracts_message() {
        let json = r#"{
            "Records": [
                {
                    "EventSource": "aws:sns",
                    "Sns": {
                        "Message": "disk usage above 90%",
                        "Subject": "ALARM",
                        "MessageId": "a1b2c3",
                        "TopicArn": "arn:aws:sns:us-east-1:123456789012:alerts",
                        "Timestamp": "2026-08-07T12:00:00.000Z"
                    }
                }
            ]
        }"#;
        let event = NotificationEvent::from_json(json).expect("valid event");
        assert_eq!(event.message().expect("message"), "disk usage above 90%");
        assert_eq!(event.records[0].sns.subject.as_deref(), Some("ALARM"));
    }

    #[test]
    fn first_record_wins() {
        let json = r#"{"Records": [
            {"Sns": {"Message": "first"}},
            {"Sns": {"Message": "second"}}
        ]}"#;
        let event = NotificationEvent::from_json(json).expect("valid event");
        assert_eq!(event.message().expect("message"), "first");
    }

    #[test]
    fn missing_records_is_no_records() {
        let event = NotificationEvent::from_json("{}").expect("empty envelope parses");
        assert!(matches!(event.message(), Err(EventError::NoRecords)));
    }

    #[test]
    fn empty_records_is_no_records() {
        let event = NotificationEvent::from_json(r#"{"Records": []}"#).expect("parses");
        assert!(matches!(event.message(), Err(EventError::NoRecords)));
    }

    #[test]
    fn missing_message_field_is_a_parse_error() {
        let json = r#"{"Records": [{"Sns": {"Subject": "no message here"}}]}"#;
        assert!(matches!(
            NotificationEvent::from_json(json),
            Err(EventError::Json(_))
        ));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            NotificationEvent::from_json("not json"),
            Err(EventError::Json(_))
        ));
    }
}

//! Event-log parsing.
//!
//! The node returns, per transaction, a JSON `log` array: one entry per
//! message, each holding an ordered list of typed events with string
//! key/value attributes. This module gives that shape typed, ordered,
//! duplicate-tolerant lookup.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventLogError {
    #[error("malformed event log JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("message log index {0} out of range (tx has {1} message logs)")]
    IndexOutOfRange(usize, usize),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub attributes: Vec<Attribute>,
}

impl Event {
    /// First attribute value matching `key`, if present.
    pub fn attribute_by_key(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Like [`Event::attribute_by_key`] but treats absence as a parser
    /// invariant violation rather than an expected absence: call this only
    /// where the attribute is guaranteed by the message's success path.
    pub fn must_attribute_by_key(&self, key: &str) -> Result<&str, crate::ParserInvariantKind> {
        self.attribute_by_key(key).ok_or_else(|| {
            crate::ParserInvariantKind::MissingEventAttribute {
                event_type: self.event_type.clone(),
                attribute: key.to_string(),
            }
        })
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.iter().any(|a| a.key == key)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageLog {
    pub msg_index: usize,
    pub events: Vec<Event>,
}

/// The parsed `log` array for one transaction, addressable per message.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ParsedTxsResultLog(pub Vec<MessageLog>);

impl ParsedTxsResultLog {
    pub fn parse(raw: &str) -> Result<Self, EventLogError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn message_log(&self, msg_index: usize) -> Result<&MessageLog, EventLogError> {
        self.0
            .get(msg_index)
            .ok_or(EventLogError::IndexOutOfRange(msg_index, self.0.len()))
    }
}

impl MessageLog {
    /// First event of `event_type`, if any.
    pub fn event_by_type(&self, event_type: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.event_type == event_type)
    }

    /// All events of `event_type`, preserving order. Empty if none.
    pub fn events_by_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> ParsedTxsResultLog {
        ParsedTxsResultLog::parse(
            r#"[
                {
                    "msg_index": 0,
                    "events": [
                        {"type": "transfer", "attributes": [{"key": "recipient", "value": "cro1a"}, {"key": "amount", "value": "10basecro"}]},
                        {"type": "transfer", "attributes": [{"key": "recipient", "value": "cro1b"}, {"key": "amount", "value": "20basecro"}]}
                    ]
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn first_event_of_type_is_returned() {
        let log = sample_log();
        let msg_log = log.message_log(0).unwrap();
        let event = msg_log.event_by_type("transfer").unwrap();
        assert_eq!(event.attribute_by_key("recipient"), Some("cro1a"));
    }

    #[test]
    fn all_events_of_type_preserves_order_and_duplicates() {
        let log = sample_log();
        let msg_log = log.message_log(0).unwrap();
        let events = msg_log.events_by_type("transfer");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].attribute_by_key("recipient"), Some("cro1a"));
        assert_eq!(events[1].attribute_by_key("recipient"), Some("cro1b"));
    }

    #[test]
    fn missing_event_type_returns_none() {
        let log = sample_log();
        let msg_log = log.message_log(0).unwrap();
        assert!(msg_log.event_by_type("unbond").is_none());
        assert!(msg_log.events_by_type("unbond").is_empty());
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let log = sample_log();
        assert!(matches!(
            log.message_log(5),
            Err(EventLogError::IndexOutOfRange(5, 1))
        ));
    }

    #[test]
    fn has_attribute_checks_presence() {
        let log = sample_log();
        let event = log.message_log(0).unwrap().event_by_type("transfer").unwrap();
        assert!(event.has_attribute("amount"));
        assert!(!event.has_attribute("sender"));
    }
}

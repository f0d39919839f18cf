//! Result events produced by one agent turn, streamed or batched back to the
//! caller in arrival order.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

use crate::llm_client::Usage;

pub type EventSink = mpsc::Sender<Event>;

#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub id: Uuid,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub payload: EventPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    /// A conversational reply addressed to the caller.
    Text { text: String },
    /// A structured intermediate result (judgment, rating, verdict, ...).
    Structured { label: String, data: Value },
    /// A turn failure surfaced mid-stream.
    Error { message: String },
}

impl Event {
    fn new(author: impl Into<String>, payload: EventPayload) -> Self {
        Event {
            id: Uuid::new_v4(),
            author: author.into(),
            timestamp: Utc::now(),
            payload,
            usage: None,
        }
    }

    pub fn text(author: impl Into<String>, text: impl Into<String>) -> Self {
        Event::new(author, EventPayload::Text { text: text.into() })
    }

    pub fn structured(author: impl Into<String>, label: impl Into<String>, data: Value) -> Self {
        Event::new(
            author,
            EventPayload::Structured {
                label: label.into(),
                data,
            },
        )
    }

    pub fn error(author: impl Into<String>, message: impl Into<String>) -> Self {
        Event::new(
            author,
            EventPayload::Error {
                message: message.into(),
            },
        )
    }

    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// Sends an event, tolerating a receiver that has gone away (e.g. an SSE
/// client that disconnected mid-turn).
pub async fn emit(sink: &EventSink, event: Event) {
    if sink.send(event).await.is_err() {
        debug!("event receiver dropped; continuing turn without a listener");
    }
}

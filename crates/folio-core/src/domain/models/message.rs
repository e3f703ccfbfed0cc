#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::Author;

/// One turn in the conversation. Immutable once created; the log only ever
/// appends.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Message {
    pub id: String,
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub attachments: Vec<String>,
}

impl Message {
    pub fn new(author: Author, text: &str) -> Message {
        return Message {
            id: Uuid::new_v4().to_string(),
            author,
            text: text.to_string(),
            timestamp: Utc::now(),
            attachments: vec![],
        };
    }

    pub fn with_attachments(author: Author, text: &str, attachments: Vec<String>) -> Message {
        let mut message = Message::new(author, text);
        message.attachments = attachments;
        return message;
    }

    pub fn has_attachments(&self) -> bool {
        return !self.attachments.is_empty();
    }
}

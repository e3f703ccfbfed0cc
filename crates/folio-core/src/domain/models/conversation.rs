#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use super::Message;

/// Append-only, time-ordered store of conversation turns. Insertion order is
/// display order.
#[derive(Default, Clone, Debug)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn append(&mut self, mut message: Message) {
        // Wall clock can step backwards; the log must not.
        if let Some(last) = self.messages.last() {
            if message.timestamp < last.timestamp {
                message.timestamp = last.timestamp;
            }
        }

        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        return &self.messages;
    }

    pub fn last(&self) -> Option<&Message> {
        return self.messages.last();
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.messages.is_empty();
    }
}

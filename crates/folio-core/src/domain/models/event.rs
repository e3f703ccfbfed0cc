use super::DocumentStatus;
use super::Message;

/// State changes pushed to the presentation layer so it can re-render without
/// polling snapshots.
#[derive(Debug, Clone)]
pub enum Event {
    MessageAppended(Message),
    DocumentStatusChanged(DocumentStatus),
    /// Transient, dismissible failure notice. Never part of the conversation.
    Notice(String),
}

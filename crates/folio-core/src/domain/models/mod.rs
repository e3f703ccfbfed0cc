mod author;
mod conversation;
mod document;
mod event;
mod message;

pub use author::Author;
pub use conversation::Conversation;
pub use document::DocumentSession;
pub use document::DocumentStatus;
pub use event::Event;
pub use message::Message;

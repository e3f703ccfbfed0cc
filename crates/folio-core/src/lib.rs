//! Session orchestration for a document chat client.
//!
//! This crate tracks the readiness of the active document, serializes query
//! dispatch against that state, and maintains the ordered conversation
//! history. A presentation layer consumes read-only snapshots and events and
//! forwards user intents in; it owns no business invariants of its own.

pub mod configuration;
pub mod domain;
pub mod errors;
pub mod infrastructure;

pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    Author, Conversation, DocumentSession, DocumentStatus, Event, Message,
};
pub use domain::services::{Session, SessionProps};
pub use errors::SessionError;
pub use infrastructure::clients::BackendManager;

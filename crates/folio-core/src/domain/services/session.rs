#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use tokio::sync::mpsc;
use tokio::sync::Mutex;

use crate::domain::models::Author;
use crate::domain::models::Conversation;
use crate::domain::models::DocumentSession;
use crate::domain::models::DocumentStatus;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::errors::SessionError;
use folio_client::AttachmentResolver;
use folio_client::DocumentClientBox;

const DOCUMENT_READY_MESSAGE: &str =
    "Your document has been processed. You can now ask questions about its content.";

pub struct SessionProps {
    pub client: DocumentClientBox,
    pub resolver: AttachmentResolver,
    pub event_tx: mpsc::UnboundedSender<Event>,
}

/// Orchestrates one active document and its accumulated conversation.
///
/// The only component that mutates the document session and the conversation
/// log. Gate checks happen atomically with the dispatch decision; the state
/// lock is never held across a network exchange.
pub struct Session {
    client: DocumentClientBox,
    resolver: AttachmentResolver,
    event_tx: mpsc::UnboundedSender<Event>,
    state: Mutex<SessionState>,
}

#[derive(Default)]
struct SessionState {
    conversation: Conversation,
    document: DocumentSession,
    query_in_flight: bool,
}

impl Session {
    pub fn new(props: SessionProps) -> Session {
        return Session {
            client: props.client,
            resolver: props.resolver,
            event_tx: props.event_tx,
            state: Mutex::new(SessionState::default()),
        };
    }

    /// Submits a document to the backend, replacing any previously active
    /// document on success. Conversation history is retained across
    /// replacements.
    pub async fn upload(&self, bytes: Vec<u8>, declared_type: &str) -> Result<(), SessionError> {
        {
            let mut state = self.state.lock().await;
            if state.document.status() == DocumentStatus::Uploading {
                return Err(SessionError::AlreadyUploading);
            }

            // Local validation must leave the lifecycle untouched.
            folio_client::ensure_supported_format(declared_type)?;

            state.document.begin_upload()?;
            self.notify(Event::DocumentStatusChanged(state.document.status()));
        }

        tracing::info!(declared_type, size = bytes.len(), "uploading document");

        match self.client.upload_document(bytes, declared_type).await {
            Ok(()) => {
                let mut state = self.state.lock().await;
                state.document.mark_ready()?;
                self.notify(Event::DocumentStatusChanged(state.document.status()));
                self.append_message(&mut state, Message::new(Author::System, DOCUMENT_READY_MESSAGE));

                tracing::info!("document ready");
                return Ok(());
            }
            Err(err) => {
                tracing::error!(error = %err, "document upload failed");

                let mut state = self.state.lock().await;
                state.document.mark_failed(&err.to_string())?;
                self.notify(Event::DocumentStatusChanged(state.document.status()));
                self.notify(Event::Notice(err.to_string()));
                return Err(err.into());
            }
        }
    }

    /// Sends one query about the active document. The user's turn is
    /// committed to the log before the network round-trip; the assistant's
    /// turn is appended only on success.
    pub async fn ask(&self, text: &str) -> Result<(), SessionError> {
        {
            let mut state = self.state.lock().await;
            if state.document.status() != DocumentStatus::Ready {
                return Err(SessionError::DocumentNotReady);
            }
            if state.query_in_flight {
                return Err(SessionError::QueryAlreadyInFlight);
            }

            // Local validation must leave the log untouched.
            folio_client::ensure_query_text(text)?;

            state.query_in_flight = true;
            self.append_message(&mut state, Message::new(Author::User, text));
        }

        tracing::info!("dispatching query");
        let result = self.client.query_document(text).await;

        let mut state = self.state.lock().await;
        state.query_in_flight = false;

        match result {
            Ok(response) => {
                let attachments = response
                    .images
                    .iter()
                    .map(|reference| self.resolver.resolve(reference))
                    .collect::<Vec<String>>();

                self.append_message(
                    &mut state,
                    Message::with_attachments(Author::Assistant, &response.answer, attachments),
                );
                return Ok(());
            }
            Err(err) => {
                tracing::error!(error = %err, "query failed");
                self.notify(Event::Notice(err.to_string()));
                return Err(err.into());
            }
        }
    }

    pub async fn messages(&self) -> Vec<Message> {
        return self.state.lock().await.conversation.messages().to_vec();
    }

    pub async fn document_status(&self) -> DocumentStatus {
        return self.state.lock().await.document.status();
    }

    pub async fn last_error(&self) -> Option<String> {
        return self
            .state
            .lock()
            .await
            .document
            .last_error()
            .map(str::to_string);
    }

    pub async fn query_in_flight(&self) -> bool {
        return self.state.lock().await.query_in_flight;
    }

    fn append_message(&self, state: &mut SessionState, message: Message) {
        state.conversation.append(message);
        if let Some(last) = state.conversation.last() {
            self.notify(Event::MessageAppended(last.clone()));
        }
    }

    fn notify(&self, event: Event) {
        // A dropped receiver never fails the operation that produced the event.
        let _ = self.event_tx.send(event);
    }
}

//! Error types for session orchestration
//!
//! Every variant is recoverable: the rejected operation simply does not
//! proceed, and the user may retry the action. Gateway failures are wrapped
//! so callers can still distinguish upload rejections from query failures.

use thiserror::Error;

use crate::domain::models::DocumentStatus;
use folio_client::ClientError;

#[derive(Error, Debug, Clone)]
pub enum SessionError {
    #[error("An upload is already in progress")]
    AlreadyUploading,
    #[error("No document is ready to be queried")]
    DocumentNotReady,
    #[error("A query is already in flight")]
    QueryAlreadyInFlight,
    #[error("Invalid document transition: {0} -> {1}")]
    InvalidTransition(DocumentStatus, DocumentStatus),
    #[error(transparent)]
    Backend(#[from] ClientError),
}

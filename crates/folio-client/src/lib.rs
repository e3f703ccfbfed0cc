//! Typed client for the document intake and answering backend
//!
//! This crate wraps the backend's two HTTP operations behind a small trait so
//! the session layer can be exercised against mocks and swapped transports
//! without code changes. The client itself is stateless and reentrant; all
//! sequencing discipline lives one level up, in the session orchestrator.

use async_trait::async_trait;

pub mod errors;
pub mod http_client;
pub mod resolver;
pub mod types;

pub use errors::ClientError;
pub use resolver::AttachmentResolver;
pub use types::{QueryRequest, QueryResponse};

/// Content type accepted by the intake endpoint.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// DocumentClient trait for communicating with the answering backend
#[async_trait]
pub trait DocumentClient: Send + Sync {
    /// Submit a document for ingestion. Resolves once the backend has
    /// accepted and processed it.
    async fn upload_document(&self, bytes: Vec<u8>, declared_type: &str)
        -> Result<(), ClientError>;

    /// Ask a question about the active document.
    async fn query_document(&self, text: &str) -> Result<QueryResponse, ClientError>;
}

pub type DocumentClientBox = Box<dyn DocumentClient>;

/// Validates a declared content type against the formats the intake endpoint
/// accepts, without touching the network.
pub fn ensure_supported_format(declared_type: &str) -> Result<(), ClientError> {
    if declared_type != PDF_CONTENT_TYPE {
        return Err(ClientError::UnsupportedFormat(declared_type.to_string()));
    }

    Ok(())
}

/// Validates that query text has content to send.
pub fn ensure_query_text(text: &str) -> Result<(), ClientError> {
    if text.trim().is_empty() {
        return Err(ClientError::EmptyQuery);
    }

    Ok(())
}

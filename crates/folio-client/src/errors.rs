//! Error types for the backend gateway
//!
//! Local validation failures are raised before any network exchange and are
//! always recoverable by correcting the user action. Remote failures carry the
//! underlying cause as text; the caller decides how to surface them.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ClientError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("Query text is empty")]
    EmptyQuery,
    #[error("Upload rejected: {0}")]
    UploadRejected(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

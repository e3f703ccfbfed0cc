#[cfg(test)]
#[path = "document_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;

use crate::errors::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
pub enum DocumentStatus {
    #[default]
    Empty,
    Uploading,
    Ready,
    Failed,
}

/// Intake status of the single active document.
///
/// Legal transitions: Empty -> Uploading -> Ready | Failed, plus
/// Ready -> Uploading and Failed -> Uploading for re-upload. Anything else is
/// an invalid transition.
#[derive(Default, Clone, Debug)]
pub struct DocumentSession {
    status: DocumentStatus,
    last_error: Option<String>,
}

impl DocumentSession {
    pub fn status(&self) -> DocumentStatus {
        return self.status;
    }

    pub fn last_error(&self) -> Option<&str> {
        return self.last_error.as_deref();
    }

    pub fn begin_upload(&mut self) -> Result<(), SessionError> {
        if self.status == DocumentStatus::Uploading {
            return Err(SessionError::InvalidTransition(
                self.status,
                DocumentStatus::Uploading,
            ));
        }

        self.status = DocumentStatus::Uploading;
        self.last_error = None;
        return Ok(());
    }

    pub fn mark_ready(&mut self) -> Result<(), SessionError> {
        if self.status != DocumentStatus::Uploading {
            return Err(SessionError::InvalidTransition(
                self.status,
                DocumentStatus::Ready,
            ));
        }

        self.status = DocumentStatus::Ready;
        return Ok(());
    }

    pub fn mark_failed(&mut self, reason: &str) -> Result<(), SessionError> {
        if self.status != DocumentStatus::Uploading {
            return Err(SessionError::InvalidTransition(
                self.status,
                DocumentStatus::Failed,
            ));
        }

        self.status = DocumentStatus::Failed;
        self.last_error = Some(reason.to_string());
        return Ok(());
    }
}

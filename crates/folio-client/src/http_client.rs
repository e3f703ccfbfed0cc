use async_trait::async_trait;
use reqwest::multipart;

use crate::types::{QueryRequest, QueryResponse};
use crate::{
    ensure_query_text, ensure_supported_format, ClientError, DocumentClient, PDF_CONTENT_TYPE,
};

/// HTTP client for the document intake and answering backend
///
/// One outstanding exchange per call, no client-side retry and no timeout
/// beyond the transport default: a stalled exchange stalls its logical
/// operation until the transport itself errors.
pub struct HttpDocumentClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDocumentClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DocumentClient for HttpDocumentClient {
    async fn upload_document(
        &self,
        bytes: Vec<u8>,
        declared_type: &str,
    ) -> Result<(), ClientError> {
        ensure_supported_format(declared_type)?;

        let upload_url = format!("{}/api/upload", self.base_url);
        let part = multipart::Part::bytes(bytes)
            .file_name("document.pdf")
            .mime_str(PDF_CONTENT_TYPE)
            .map_err(|err| ClientError::UploadRejected(err.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| ClientError::UploadRejected(err.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::error!(status = status.as_u16(), "upload rejected by backend");
            return Err(ClientError::UploadRejected(format!(
                "backend returned status {}",
                status.as_u16()
            )));
        }

        Ok(())
    }

    async fn query_document(&self, text: &str) -> Result<QueryResponse, ClientError> {
        ensure_query_text(text)?;

        let query_url = format!("{}/api/query", self.base_url);
        let response = self
            .client
            .post(&query_url)
            .json(&QueryRequest::new(text))
            .send()
            .await
            .map_err(|err| ClientError::QueryFailed(err.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::error!(status = status.as_u16(), "query rejected by backend");
            return Err(ClientError::QueryFailed(format!(
                "backend returned status {}",
                status.as_u16()
            )));
        }

        response
            .json::<QueryResponse>()
            .await
            .map_err(|err| ClientError::QueryFailed(err.to_string()))
    }
}

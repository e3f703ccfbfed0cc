use serde::{Deserialize, Serialize};

/// Request body for the query endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

/// Response body from the query endpoint.
///
/// `images` holds attachment references, each either an absolute URL or a
/// path rooted at the backend origin. The backend may omit the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub images: Vec<String>,
}

pub mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AlignError;

/// How a request is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`, used for every API v2 call.
    Bearer,
    /// Username and v1 token, used for the About page.
    Basic,
}

/// Status code and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON. A non-2xx response with an unparsable body is
    /// reported as a status failure rather than a decode failure.
    pub fn json(&self, url: &str) -> Result<Value, AlignError> {
        serde_json::from_str(&self.body).map_err(|source| {
            if self.is_success() {
                AlignError::Decode {
                    url: url.to_string(),
                    source,
                }
            } else {
                AlignError::Status {
                    url: url.to_string(),
                    status: self.status,
                    body: self.body.clone(),
                }
            }
        })
    }
}

/// One blocking round-trip per call; callers await each request before
/// issuing the next.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, auth: AuthScheme) -> Result<HttpResponse, AlignError>;
    async fn patch(&self, url: &str, body: &Value) -> Result<HttpResponse, AlignError>;
    async fn post(&self, url: &str, body: &Value) -> Result<HttpResponse, AlignError>;
}

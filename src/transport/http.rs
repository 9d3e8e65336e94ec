use async_trait::async_trait;
use base64::Engine;
use serde_json::Value;
use tracing::debug;

use super::{AuthScheme, HttpResponse, Transport};
use crate::config::Credentials;
use crate::error::AlignError;

const WRITE_CONTENT_TYPE: &str = "application/json;odata.metadata=minimal;odata.streaming=true";

pub struct HttpTransport {
    bearer_header: String,
    basic_header: Option<String>,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(credentials: &Credentials, verify_tls: bool) -> Result<Self, AlignError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(!verify_tls)
            .build()
            .map_err(|source| AlignError::Transport {
                url: String::new(),
                source,
            })?;

        let basic_header = match (&credentials.username, &credentials.v1_token) {
            (Some(user), Some(token)) => {
                let encoded =
                    base64::engine::general_purpose::STANDARD.encode(format!("{user}:{token}"));
                Some(format!("Basic {encoded}"))
            }
            _ => None,
        };

        Ok(Self {
            bearer_header: format!("Bearer {}", credentials.token),
            basic_header,
            client,
        })
    }

    fn auth_header(&self, auth: AuthScheme) -> &str {
        match auth {
            AuthScheme::Bearer => &self.bearer_header,
            AuthScheme::Basic => self.basic_header.as_deref().unwrap_or(&self.bearer_header),
        }
    }

    async fn send(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<HttpResponse, AlignError> {
        let to_err = |source| AlignError::Transport {
            url: url.to_string(),
            source,
        };
        let resp = request.send().await.map_err(to_err)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(to_err)?;
        debug!(url, status, "response received");
        Ok(HttpResponse::new(status, body))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, auth: AuthScheme) -> Result<HttpResponse, AlignError> {
        debug!(url, ?auth, "GET");
        let request = self
            .client
            .get(url)
            .header("Authorization", self.auth_header(auth))
            .header("Accept", "application/json");
        self.send(url, request).await
    }

    async fn patch(&self, url: &str, body: &Value) -> Result<HttpResponse, AlignError> {
        debug!(url, %body, "PATCH");
        let request = self
            .client
            .patch(url)
            .header("Authorization", &self.bearer_header)
            .header("Content-Type", WRITE_CONTENT_TYPE)
            .body(body.to_string());
        self.send(url, request).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<HttpResponse, AlignError> {
        debug!(url, "POST");
        let request = self
            .client
            .post(url)
            .header("Authorization", &self.bearer_header)
            .header("Content-Type", WRITE_CONTENT_TYPE)
            .body(body.to_string());
        self.send(url, request).await
    }
}

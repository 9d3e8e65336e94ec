use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::{AuthScheme, HttpResponse, Transport};
use crate::error::AlignError;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Replays queued GET responses in order and answers writes with a fixed
/// status per method, recording every request it sees.
#[derive(Clone)]
pub struct MockTransport {
    gets: Arc<Mutex<VecDeque<HttpResponse>>>,
    writes: Arc<Mutex<VecDeque<HttpResponse>>>,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            gets: Arc::new(Mutex::new(VecDeque::new())),
            writes: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_get(self, body: Value) -> Self {
        self.gets
            .lock()
            .unwrap()
            .push_back(HttpResponse::new(200, body.to_string()));
        self
    }

    pub fn with_get_response(self, response: HttpResponse) -> Self {
        self.gets.lock().unwrap().push_back(response);
        self
    }

    /// Queue the response for the next PATCH or POST. Writes with nothing
    /// queued answer 204.
    pub fn with_write(self, status: u16, body: &str) -> Self {
        self.writes
            .lock()
            .unwrap()
            .push_back(HttpResponse::new(status, body));
        self
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self, method: &str) -> Vec<String> {
        self.recorded()
            .into_iter()
            .filter(|r| r.method == method)
            .map(|r| r.url)
            .collect()
    }

    fn record(&self, method: &'static str, url: &str, body: Option<&Value>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });
    }

    fn next_write(&self) -> HttpResponse {
        self.writes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::new(204, ""))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str, _auth: AuthScheme) -> Result<HttpResponse, AlignError> {
        self.record("GET", url, None);
        self.gets
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AlignError::Status {
                url: url.to_string(),
                status: 404,
                body: "no mock response queued".into(),
            })
    }

    async fn patch(&self, url: &str, body: &Value) -> Result<HttpResponse, AlignError> {
        self.record("PATCH", url, Some(body));
        Ok(self.next_write())
    }

    async fn post(&self, url: &str, body: &Value) -> Result<HttpResponse, AlignError> {
        self.record("POST", url, Some(body));
        Ok(self.next_write())
    }
}

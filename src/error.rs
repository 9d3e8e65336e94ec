use thiserror::Error;

/// Failures raised by the retrieval core. Write outcomes are not errors; they
/// are reported through [`crate::transport::HttpResponse`] status codes.
#[derive(Debug, Error)]
pub enum AlignError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("could not parse response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON array of items from {url}")]
    NotAnArray { url: String },

    #[error("expected a JSON object for a {item_type} item")]
    NotAnObject { item_type: String },

    #[error("{item_type} item has no id")]
    MissingId { item_type: String },

    #[error("invalid instance url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

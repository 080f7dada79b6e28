use thiserror::Error;

/// Failure to retrieve or decode a catalog resource.
///
/// Caught at the top of each page's load routine and surfaced as a single
/// text message in that page's primary region; never retried.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

//! Error types surfaced to the user

use thiserror::Error;

/// Failure of a REST call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never completed (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Request could not be built (bad body, FormData failure)
    #[error("request error: {0}")]
    Request(String),
    /// Non-success status without a readable `{error}` body
    #[error("server responded with status {0}")]
    Status(u16),
    /// Body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
    /// `{error}` reported by the server, shown verbatim
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Client-side rejection of a chat edit, before any request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Invalid message index. Cannot edit this message. Index: {0}")]
    InvalidIndex(usize),
    #[error("Cannot edit this message. Please try again after sending a new message.")]
    NotEditable,
    #[error("Message content is empty.")]
    EmptyContent,
    #[error("Another edit is still being submitted.")]
    EditInFlight,
}

//! Error types for the health handler

use thiserror::Error;

/// Context identifier that does not carry a region segment.
///
/// A well-formed identifier has at least four colon-delimited segments,
/// e.g. `arn:aws:lambda:us-east-1:123:function:foo`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid invocation context identifier '{identifier}': expected at least 4 ':'-delimited segments, found {segments}")]
pub struct InvalidContextError {
    pub identifier: String,
    pub segments: usize,
}

/// Errors returned by [`crate::handler::handle`]
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    InvalidContext(#[from] InvalidContextError),

    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from a one-shot invocation of a raw platform event
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("invalid event JSON: {0}")]
    Event(#[source] serde_json::Error),

    #[error(transparent)]
    Handler(#[from] HandlerError),

    #[error("failed to serialize response: {0}")]
    Response(#[source] serde_json::Error),
}

use thiserror::Error;

/// Failure of one page fetch. Stored in the section state until retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Failures talking to a section actor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("Section actor closed")]
    ActorClosed,
    #[error("Section actor dropped response channel")]
    ActorDropped,
    #[error("Section task failed: {0}")]
    TaskFailed(String),
}

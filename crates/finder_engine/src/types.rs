use thiserror::Error;

/// Lookup counter echoed back by completions so the caller can recognize
/// stale responses. Matches `finder_core::Generation`; the engine stays
/// independent of the core crate.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error")]
    Network,
}

/// A failed lookup: the kind for branching, the message for the banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LookupError {
    pub kind: FailureKind,
    pub message: String,
}

impl LookupError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    LookupSettled {
        generation: Generation,
        result: Result<serde_json::Value, LookupError>,
    },
}

//! Error types for the debate engine

/// Failure of a single capability call (`process` or `vote`).
///
/// The engine never propagates these; a failed turn is recorded as an
/// `[Error: {message}]` response where `{message}` is this error's display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// Request failed; displays the underlying message unchanged
    #[error("{0}")]
    Request(String),

    #[error("provider returned an empty response")]
    EmptyResponse,
}

impl ProviderError {
    pub fn request(message: impl Into<String>) -> Self {
        ProviderError::Request(message.into())
    }
}

/// Errors surfaced to the caller before any turn executes
#[derive(Debug, thiserror::Error)]
pub enum DebateError {
    #[error("participant id must not be empty")]
    EmptyParticipantId,

    #[error("duplicate participant id: {0}")]
    DuplicateParticipant(String),

    #[error("unknown provider: {0} (expected 'ollama' or 'mock')")]
    UnknownProvider(String),

    #[error("config IO error: {0}")]
    ConfigIo(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),
}

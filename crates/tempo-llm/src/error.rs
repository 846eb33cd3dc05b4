//! Classifier error types.

/// Errors from a chat-completion request.
///
/// These never reach the engine: [`ChatClient::classify`](crate::ChatClient::classify)
/// collapses every failure to `None`.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request exceeded its timeout.
    #[error("connection timeout")]
    Timeout,

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not a chat completion.
    #[error("parse error: {0}")]
    Parse(String),
}

impl LlmError {
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(error)
        }
    }
}

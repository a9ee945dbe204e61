use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The vision API answered with a non-2xx status. `body` is already an excerpt.
    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Empty model response")]
    EmptyModelResponse { raw_body: String },

    #[error("Model returned non-JSON content")]
    NonJsonModelContent { content: String },

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

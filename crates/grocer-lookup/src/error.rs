use thiserror::Error;

/// Errors returned by the price lookup client.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from generative endpoint: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response (or the generated text inside it) did not decode into
    /// the expected shape.
    #[error("schema mismatch in {context}: {source}")]
    Schema {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The model returned no candidate text at all.
    #[error("generative endpoint returned no text")]
    EmptyResponse,

    /// Item name or location was blank; no request was sent.
    #[error("invalid lookup input: {0}")]
    InvalidInput(String),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl LookupError {
    /// `true` when the endpoint could not be reached or refused the request.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LookupError::Transport(_) | LookupError::UnexpectedStatus { .. }
        )
    }

    /// `true` when a response arrived but did not match the shop schema.
    #[must_use]
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            LookupError::Schema { .. } | LookupError::EmptyResponse
        )
    }
}

// Error types shared by the client services and the binaries
use thiserror::Error;

/// A failed generation call. The UI treats every variant the same way;
/// the variants only make the log line useful.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode model response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("prompt was blocked by the model service ({0})")]
    Blocked(String),

    #[error("model response contained no text")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} must be a number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

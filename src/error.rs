use thiserror::Error;

/// Errors surfaced by the Recipp client.
///
/// Failures coming out of the HTTP layer are split into the three cases a
/// caller usually wants to tell apart: nothing came back, something came
/// back with a failure status, or the request could not be built at all.
#[derive(Error, Debug)]
pub enum RecippError {
    /// No response was received (connection refused, timeout, broken pipe)
    #[error("No response received from Recipp API: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Recipp API returned {status}: {body}")]
    Server {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request could not be constructed locally
    #[error("Invalid request: {0}")]
    Request(String),

    /// The response body did not match the expected shape
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Sort key name not recognized
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
}

impl RecippError {
    /// Short classification label used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Server { .. } => "server",
            Self::Request(_) => "request",
            Self::Decode { .. } => "decode",
            Self::UnknownSortKey(_) => "sort-key",
        }
    }
}

impl From<reqwest::Error> for RecippError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            Self::Request(e.to_string())
        } else {
            Self::Transport(e)
        }
    }
}

pub type Result<T> = std::result::Result<T, RecippError>;

use std::time::Duration;

use thiserror::Error;

/// Failures of a single repair-provider call.
///
/// None of these propagate to the caller of the repair pipeline: the
/// orchestrator folds every variant into the attempts audit trail and falls
/// back to the heuristic result. The `Display` text is what lands in the
/// trail.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // reqwest does not expose the configured duration on the error
            ProviderError::Timeout(Duration::ZERO)
        } else {
            ProviderError::Request(err.to_string())
        }
    }
}

/// Errors surfaced at the transport boundary (file/stdin input, output).
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read from stdin: {0}")]
    Stdin(std::io::Error),
}

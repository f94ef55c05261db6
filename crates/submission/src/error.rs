//! Submission error types.

use thiserror::Error;

/// Ways a checkout submission can fail.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The payload could not be encoded as JSON.
    #[error("Failed to serialize checkout payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The endpoint answered 405. The response body was not read.
    #[error("Checkout endpoint rejected the method (405)")]
    MethodNotAllowed,

    /// The response body was not valid JSON.
    #[error("Failed to parse checkout response: {0}")]
    Parse(#[source] serde_json::Error),

    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),
}

impl SubmitError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Serialization(_) => "serialization",
            SubmitError::MethodNotAllowed => "method_not_allowed",
            SubmitError::Parse(_) => "parse",
            SubmitError::Network(_) => "network",
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Network(err.to_string())
    }
}

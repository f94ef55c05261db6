//! Driver error types.

use submission::SubmitError;
use thiserror::Error;

/// Errors that stop the storefront driver.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The checkout document could not be read.
    #[error("Failed to read checkout document: {0}")]
    Io(#[from] std::io::Error),

    /// The checkout document is not valid JSON of the expected shape.
    #[error("Invalid checkout document: {0}")]
    Document(#[from] serde_json::Error),

    /// Submitting the assembled order failed.
    #[error("Checkout submission failed: {0}")]
    Submit(#[from] SubmitError),
}

//! Transport seam between the submission client and the network.

pub mod http;
pub mod memory;

use async_trait::async_trait;

use crate::error::SubmitError;

pub use http::HttpTransport;
pub use memory::InMemoryTransport;

/// Content type sent with every checkout request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A fully encoded checkout request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub url: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl OutgoingRequest {
    /// Builds a JSON request for `url` with an already encoded body.
    pub fn json(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            content_type: JSON_CONTENT_TYPE,
            body,
        }
    }
}

/// A response whose status is known but whose body has not been read yet.
#[async_trait]
pub trait PendingResponse: Send {
    fn status(&self) -> u16;

    /// Reads the whole body. Consumes the response.
    async fn into_bytes(self: Box<Self>) -> Result<Vec<u8>, SubmitError>;
}

/// Sends checkout requests.
#[async_trait]
pub trait CheckoutTransport: Send + Sync {
    /// Issues a single `POST`.
    async fn post(&self, request: OutgoingRequest)
    -> Result<Box<dyn PendingResponse>, SubmitError>;
}

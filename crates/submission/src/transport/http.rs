//! `reqwest` transport.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::{CheckoutTransport, OutgoingRequest, PendingResponse};
use crate::error::SubmitError;

/// Transport that talks to the real checkout endpoint over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client (proxies, TLS roots, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

struct HttpResponse(reqwest::Response);

#[async_trait]
impl PendingResponse for HttpResponse {
    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    async fn into_bytes(self: Box<Self>) -> Result<Vec<u8>, SubmitError> {
        let bytes = self.0.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl CheckoutTransport for HttpTransport {
    async fn post(
        &self,
        request: OutgoingRequest,
    ) -> Result<Box<dyn PendingResponse>, SubmitError> {
        let response = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body)
            .send()
            .await?;

        Ok(Box::new(HttpResponse(response)))
    }
}

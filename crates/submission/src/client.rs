//! Checkout submission client.

use serde::Serialize;
use serde_json::Value;

use crate::error::SubmitError;
use crate::transport::{CheckoutTransport, HttpTransport, OutgoingRequest};

/// Fixed diagnostic logged when the endpoint answers 405.
pub const METHOD_NOT_ALLOWED_DIAGNOSTIC: &str = "ERROR_METHOD_NOT_ALLOWED";

/// Default path of the checkout endpoint.
pub const DEFAULT_CHECKOUT_PATH: &str = "/api/checkout";

const METHOD_NOT_ALLOWED: u16 = 405;

/// Parsed answer from the checkout endpoint.
///
/// Any status other than 405 ends up here, errors included.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutResponse {
    pub status: u16,
    pub body: Value,
}

impl CheckoutResponse {
    /// Returns the body's `error` field, if present.
    pub fn error(&self) -> Option<&Value> {
        self.body.get("error")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Posts checkout payloads to a single endpoint.
#[derive(Debug, Clone)]
pub struct SubmissionClient<T: CheckoutTransport = HttpTransport> {
    transport: T,
    endpoint: String,
}

impl SubmissionClient<HttpTransport> {
    /// Creates a client that posts over HTTP to `endpoint`.
    pub fn http(endpoint: impl Into<String>) -> Self {
        Self::new(HttpTransport::new(), endpoint)
    }
}

impl<T: CheckoutTransport> SubmissionClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Serializes `payload` and posts it once to the endpoint.
    ///
    /// A 405 is logged with [`METHOD_NOT_ALLOWED_DIAGNOSTIC`] and returned
    /// as [`SubmitError::MethodNotAllowed`] without reading the body. Every
    /// other status has its body parsed as JSON and the body's `error`
    /// field logged.
    #[tracing::instrument(skip(self, payload), fields(endpoint = %self.endpoint))]
    pub async fn submit<P>(&self, payload: &P) -> Result<CheckoutResponse, SubmitError>
    where
        P: Serialize + ?Sized,
    {
        let result = self.send(payload).await;

        let outcome = match &result {
            Ok(_) => "responded",
            Err(err) => err.kind(),
        };
        metrics::counter!("checkout_submissions_total", "outcome" => outcome).increment(1);

        result
    }

    async fn send<P>(&self, payload: &P) -> Result<CheckoutResponse, SubmitError>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload).map_err(SubmitError::Serialization)?;

        let response = self
            .transport
            .post(OutgoingRequest::json(self.endpoint.as_str(), body))
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "checkout request failed"))?;

        let status = response.status();
        if status == METHOD_NOT_ALLOWED {
            tracing::warn!(status, "{}", METHOD_NOT_ALLOWED_DIAGNOSTIC);
            return Err(SubmitError::MethodNotAllowed);
        }

        let bytes = response.into_bytes().await?;
        let body: Value = serde_json::from_slice(&bytes).map_err(SubmitError::Parse)?;
        let response = CheckoutResponse { status, body };

        match response.error() {
            Some(error) => tracing::info!(status, %error, "checkout response received"),
            None => tracing::info!(status, error = "undefined", "checkout response received"),
        }

        Ok(response)
    }
}

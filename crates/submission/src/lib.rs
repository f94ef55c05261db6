//! Submission of the assembled checkout order.
//!
//! [`SubmissionClient`] serializes a payload to JSON, posts it once to the
//! checkout endpoint and reports the outcome as a typed result:
//! - `405 Method Not Allowed` is logged with a fixed diagnostic and its
//!   body is never read
//! - every other status is handled alike: the body is parsed as JSON and
//!   its `error` field is logged
//!
//! There are no retries, no timeout and no guard against double submits.

pub mod client;
pub mod error;
pub mod transport;

pub use client::{
    CheckoutResponse, DEFAULT_CHECKOUT_PATH, METHOD_NOT_ALLOWED_DIAGNOSTIC, SubmissionClient,
};
pub use error::SubmitError;
pub use transport::{
    CheckoutTransport, HttpTransport, InMemoryTransport, OutgoingRequest, PendingResponse,
};

//! In-memory transport for testing.

use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use super::{CheckoutTransport, OutgoingRequest, PendingResponse};
use crate::error::SubmitError;

#[derive(Debug)]
enum Scripted {
    Respond { status: u16, body: Vec<u8> },
    Fail(String),
}

#[derive(Debug, Default)]
struct InMemoryTransportState {
    script: VecDeque<Scripted>,
    requests: Vec<OutgoingRequest>,
    bodies_read: usize,
}

/// Transport that replays scripted responses and records every request.
///
/// Responses are consumed in the order they were scripted. A request with
/// nothing scripted fails with a network error.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransport {
    state: Arc<RwLock<InMemoryTransportState>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and raw body.
    pub fn respond_with(&self, status: u16, body: impl Into<Vec<u8>>) -> &Self {
        self.with_state(|state| {
            state.script.push_back(Scripted::Respond {
                status,
                body: body.into(),
            })
        });
        self
    }

    /// Queues a transport failure.
    pub fn fail_with(&self, reason: impl Into<String>) -> &Self {
        self.with_state(|state| state.script.push_back(Scripted::Fail(reason.into())));
        self
    }

    /// Returns every request sent so far.
    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.with_state(|state| state.requests.clone())
    }

    /// Returns how many response bodies have been read.
    pub fn bodies_read(&self) -> usize {
        self.with_state(|state| state.bodies_read)
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut InMemoryTransportState) -> T) -> T {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

struct InMemoryResponse {
    status: u16,
    body: Vec<u8>,
    transport: InMemoryTransport,
}

#[async_trait]
impl PendingResponse for InMemoryResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn into_bytes(self: Box<Self>) -> Result<Vec<u8>, SubmitError> {
        self.transport.with_state(|state| state.bodies_read += 1);
        Ok(self.body)
    }
}

#[async_trait]
impl CheckoutTransport for InMemoryTransport {
    async fn post(
        &self,
        request: OutgoingRequest,
    ) -> Result<Box<dyn PendingResponse>, SubmitError> {
        let next = self.with_state(|state| {
            state.requests.push(request);
            state.script.pop_front()
        });

        match next {
            Some(Scripted::Respond { status, body }) => Ok(Box::new(InMemoryResponse {
                status,
                body,
                transport: self.clone(),
            })),
            Some(Scripted::Fail(reason)) => Err(SubmitError::Network(reason)),
            None => Err(SubmitError::Network("no scripted response".to_string())),
        }
    }
}

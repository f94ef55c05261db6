//! Order state shared by the checkout steps.

mod store;

use common::CheckoutId;
use serde::{Deserialize, Serialize};

use crate::address::AddressFormData;

pub use store::{OrderDispatch, OrderStore};

/// Actions accepted by the order state.
///
/// Serialized as `{ "type": "SET_ADDRESS", "payload": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderAction {
    /// Replaces the shipping address with a validated one.
    SetAddress(AddressFormData),
}

impl OrderAction {
    /// Returns the action type name.
    pub fn action_type(&self) -> &'static str {
        match self {
            OrderAction::SetAddress(_) => "SET_ADDRESS",
        }
    }
}

/// Data collected so far during one checkout session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderState {
    checkout_id: CheckoutId,

    /// Last address published by the address step.
    address: Option<AddressFormData>,

    /// Number of actions applied so far.
    #[serde(default)]
    revision: u64,
}

impl OrderState {
    /// Creates empty state for a new checkout session.
    pub fn new(checkout_id: CheckoutId) -> Self {
        Self {
            checkout_id,
            address: None,
            revision: 0,
        }
    }

    pub fn checkout_id(&self) -> CheckoutId {
        self.checkout_id
    }

    pub fn address(&self) -> Option<&AddressFormData> {
        self.address.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies an action. Pure state transition, no side effects.
    pub fn reduce(&mut self, action: OrderAction) {
        match action {
            OrderAction::SetAddress(address) => self.address = Some(address),
        }
        self.revision += 1;
    }
}

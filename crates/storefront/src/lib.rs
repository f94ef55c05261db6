//! Command-line driver for the storefront checkout.
//!
//! Reads a checkout document, runs the address step against a fresh order
//! store and, when the address is accepted, submits the assembled order.

pub mod config;
pub mod error;

use checkout::{
    AddressFormData, AddressStep, OrderStore, RawAddressInput, ValidationErrors, WizardStep,
};
use common::CheckoutId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use submission::{CheckoutResponse, CheckoutTransport, SubmissionClient};

pub use config::Config;
pub use error::StorefrontError;

/// Wizard index of the address step; the customer step comes first.
pub const ADDRESS_STEP: i64 = 1;

/// Input to the driver: raw address fields plus the rest of the order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutDocument {
    #[serde(default)]
    pub address: RawAddressInput,

    /// Customer, card and item data collected by the other steps.
    #[serde(default)]
    pub order: Value,
}

/// Body posted to the checkout endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInput {
    pub checkout_id: CheckoutId,
    pub address: AddressFormData,
    pub order: Value,
}

/// How a driver run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The address step rejected the input; nothing was sent.
    Rejected(ValidationErrors),

    /// The order was sent and the endpoint answered.
    Submitted(CheckoutResponse),
}

/// Runs the address step on `document` and submits the order on success.
#[tracing::instrument(skip_all)]
pub async fn run<T: CheckoutTransport>(
    document: CheckoutDocument,
    client: &SubmissionClient<T>,
) -> Result<Outcome, StorefrontError> {
    let store = OrderStore::new(CheckoutId::new());
    let wizard = WizardStep::starting_at(ADDRESS_STEP);
    let mut step = AddressStep::new(ADDRESS_STEP, store.clone(), wizard);

    let address = match step.validate_and_advance(&document.address) {
        Ok(address) => address,
        Err(errors) => return Ok(Outcome::Rejected(errors)),
    };

    let state = store.snapshot();
    let input = CheckoutInput {
        checkout_id: state.checkout_id(),
        address,
        order: document.order,
    };
    tracing::info!(checkout_id = %input.checkout_id, "submitting checkout");

    let response = client.submit(&input).await?;
    Ok(Outcome::Submitted(response))
}

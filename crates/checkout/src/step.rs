//! The address step of the checkout wizard.

use crate::address::{AddressField, AddressFormData, RawAddressInput, validate};
use crate::error::ValidationErrors;
use crate::order::{OrderAction, OrderDispatch};
use crate::wizard::WizardStep;

/// Receiver of programmatic focus requests, implemented by the rendering layer.
pub trait FocusSink {
    fn focus(&mut self, field: AddressField);
}

/// Controller for the address step.
///
/// Holds the in-progress form values and the errors from the last submit
/// attempt. The order state is reached only through `D`, and the wizard
/// only through its [`WizardStep`] handle.
pub struct AddressStep<D: OrderDispatch> {
    /// Wizard index at which this step is shown.
    position: i64,
    dispatch: D,
    wizard: WizardStep,
    values: RawAddressInput,
    errors: ValidationErrors,
}

impl<D: OrderDispatch> AddressStep<D> {
    /// Field that receives focus whenever the step is rendered.
    pub const FOCUS_FIELD: AddressField = AddressField::Address1;

    /// Creates the step with an empty form.
    pub fn new(position: i64, dispatch: D, wizard: WizardStep) -> Self {
        Self {
            position,
            dispatch,
            wizard,
            values: RawAddressInput::new(),
            errors: ValidationErrors::new(),
        }
    }

    /// Creates the step with the storefront's prefilled form values.
    pub fn with_defaults(position: i64, dispatch: D, wizard: WizardStep) -> Self {
        let mut step = Self::new(position, dispatch, wizard);
        step.values = RawAddressInput::new()
            .with(AddressField::Address1, "calle siempreviva")
            .with(AddressField::Address2, "")
            .with(AddressField::City, "sin city")
            .with(AddressField::State, "sin state")
            .with(AddressField::ZipCode, "6666");
        step
    }

    /// Returns true while the wizard is on this step.
    pub fn is_active(&self) -> bool {
        self.wizard.current() == self.position
    }

    pub fn values(&self) -> &RawAddressInput {
        &self.values
    }

    /// Errors from the last failed submit, minus fields edited since.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Called by the rendering layer when the step mounts or updates.
    ///
    /// Places focus on [`Self::FOCUS_FIELD`] while the step is active.
    /// Keystrokes go through [`edit`](Self::edit) and never reach here.
    pub fn render(&self, focus: &mut impl FocusSink) {
        if self.is_active() {
            focus.focus(Self::FOCUS_FIELD);
        }
    }

    /// Records a new value for a field and clears that field's stale error.
    pub fn edit(&mut self, field: AddressField, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors.clear(field);
    }

    /// Validates the current form values and advances on success.
    pub fn submit(&mut self) -> Result<AddressFormData, ValidationErrors> {
        let raw = self.values.clone();
        self.validate_and_advance(&raw)
    }

    /// Validates `raw` and, when every rule passes, dispatches exactly one
    /// `SET_ADDRESS` and moves the wizard forward by one.
    ///
    /// On failure nothing is dispatched and the wizard does not move; the
    /// errors are returned and kept for display.
    #[tracing::instrument(skip(self, raw), fields(position = self.position))]
    pub fn validate_and_advance(
        &mut self,
        raw: &RawAddressInput,
    ) -> Result<AddressFormData, ValidationErrors> {
        match validate(raw) {
            Ok(address) => {
                self.errors = ValidationErrors::new();
                self.dispatch.dispatch(OrderAction::SetAddress(address.clone()));
                let step = self.wizard.advance();

                metrics::counter!("checkout_address_submissions_total", "outcome" => "accepted")
                    .increment(1);
                tracing::info!(step, "address accepted, advancing");
                Ok(address)
            }
            Err(errors) => {
                metrics::counter!("checkout_address_submissions_total", "outcome" => "rejected")
                    .increment(1);
                tracing::debug!(
                    failed_fields = errors.len(),
                    "address rejected by validation"
                );
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Moves the wizard back one step without validating or dispatching.
    #[tracing::instrument(skip(self), fields(position = self.position))]
    pub fn go_back(&mut self) -> i64 {
        let step = self.wizard.retreat();
        metrics::counter!("checkout_step_back_total").increment(1);
        tracing::debug!(step, "returned to previous step");
        step
    }
}

//! Address step of the storefront checkout wizard.
//!
//! This crate provides:
//! - Address form data and the per-field validation rules
//! - Order state with its single `SET_ADDRESS` action and a shared store
//! - The wizard step index handle shared by every checkout step
//! - [`AddressStep`], which validates input, publishes the address and
//!   moves the wizard forward or back

pub mod address;
pub mod error;
pub mod order;
pub mod step;
pub mod wizard;

pub use address::{
    ADDRESS_RULES, AddressField, AddressFormData, FieldRule, RawAddressInput, validate,
};
pub use error::{FieldError, ValidationErrors};
pub use order::{OrderAction, OrderDispatch, OrderState, OrderStore};
pub use step::{AddressStep, FocusSink};
pub use wizard::WizardStep;

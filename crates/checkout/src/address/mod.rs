//! Address form data and raw field input.

mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use rules::{ADDRESS_RULES, FieldRule, validate};

/// The fields of the address form.
///
/// Serialized with the names the storefront front end uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    Address1,
    Address2,
    City,
    State,
    ZipCode,
}

impl AddressField {
    /// All fields in form order.
    pub const ALL: [AddressField; 5] = [
        AddressField::Address1,
        AddressField::Address2,
        AddressField::City,
        AddressField::State,
        AddressField::ZipCode,
    ];

    /// Returns the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::Address1 => "address1",
            AddressField::Address2 => "address2",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::ZipCode => "zipCode",
        }
    }
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shipping address that passed every field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFormData {
    /// Street and number.
    pub address1: String,

    /// Apartment, floor or unit; may be empty.
    pub address2: String,

    pub city: String,

    /// Province or state.
    pub state: String,

    pub zip_code: String,
}

/// Current, unvalidated values of the address form.
///
/// A field that was never filled in reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAddressInput(BTreeMap<AddressField, String>);

impl RawAddressInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: AddressField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Returns the current value of a field, or `""` if it is unset.
    pub fn value(&self, field: AddressField) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }
}

impl From<&AddressFormData> for RawAddressInput {
    fn from(data: &AddressFormData) -> Self {
        RawAddressInput::new()
            .with(AddressField::Address1, data.address1.as_str())
            .with(AddressField::Address2, data.address2.as_str())
            .with(AddressField::City, data.city.as_str())
            .with(AddressField::State, data.state.as_str())
            .with(AddressField::ZipCode, data.zip_code.as_str())
    }
}

impl<S: Into<String>> FromIterator<(AddressField, S)> for RawAddressInput {
    fn from_iter<I: IntoIterator<Item = (AddressField, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(f, v)| (f, v.into())).collect())
    }
}

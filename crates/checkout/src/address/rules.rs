//! Field rules for the address form and the validation pass over them.

use crate::error::{FieldError, ValidationErrors};

use super::{AddressField, AddressFormData, RawAddressInput};

/// Constraints applied to one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: AddressField,

    /// The field must be non-empty.
    pub required: bool,

    /// Minimum length in UTF-16 code units, checked only on non-empty values.
    pub min_length: Option<usize>,

    pub required_message: &'static str,

    pub min_length_message: &'static str,
}

impl FieldRule {
    const fn required_min(
        field: AddressField,
        min_length: usize,
        required_message: &'static str,
        min_length_message: &'static str,
    ) -> Self {
        Self {
            field,
            required: true,
            min_length: Some(min_length),
            required_message,
            min_length_message,
        }
    }

    const fn optional(field: AddressField) -> Self {
        Self {
            field,
            required: false,
            min_length: None,
            required_message: "",
            min_length_message: "",
        }
    }

    /// Checks a single value against this rule.
    ///
    /// An empty required value reports only `Required`; the length check
    /// applies to non-empty values.
    pub fn check(&self, value: &str) -> Result<(), FieldError> {
        if value.is_empty() {
            if self.required {
                return Err(FieldError::Required {
                    message: self.required_message,
                });
            }
            return Ok(());
        }

        match self.min_length {
            Some(min) if value.encode_utf16().count() < min => Err(FieldError::TooShort {
                min,
                message: self.min_length_message,
            }),
            _ => Ok(()),
        }
    }
}

/// Rules for the address step, one per field in form order.
pub const ADDRESS_RULES: [FieldRule; 5] = [
    FieldRule::required_min(
        AddressField::Address1,
        3,
        "Su direccion es requerida",
        "Su direccion debe tener al menos 3 caracteres",
    ),
    FieldRule::optional(AddressField::Address2),
    FieldRule::required_min(
        AddressField::City,
        3,
        "Su ciudad es requerida",
        "Su ciudad debe tener al menos 3 caracteres",
    ),
    FieldRule::required_min(
        AddressField::State,
        3,
        "Su provincia es requerida",
        "Su provincia debe tener al menos 3 caracteres",
    ),
    FieldRule::required_min(
        AddressField::ZipCode,
        3,
        "Su codigo postal es requerido",
        "Su codigo postal debe tener al menos 3 caracteres",
    ),
];

/// Validates raw form input against [`ADDRESS_RULES`].
///
/// Every rule is evaluated; the returned errors cover all failing fields.
/// On success the values are copied verbatim into an [`AddressFormData`].
pub fn validate(input: &RawAddressInput) -> Result<AddressFormData, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for rule in &ADDRESS_RULES {
        if let Err(err) = rule.check(input.value(rule.field)) {
            errors.insert(rule.field, err);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(AddressFormData {
        address1: input.value(AddressField::Address1).to_string(),
        address2: input.value(AddressField::Address2).to_string(),
        city: input.value(AddressField::City).to_string(),
        state: input.value(AddressField::State).to_string(),
        zip_code: input.value(AddressField::ZipCode).to_string(),
    })
}

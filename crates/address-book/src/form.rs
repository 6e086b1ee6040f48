//! Add/edit address form state and its mapping to the API payload.

use serde::{Deserialize, Serialize};

use crate::raw::{RawAddress, EDIT_TYPE_KEYS};
use crate::types::{AddressPayload, FormAddressType};
use crate::validation::{
    local_phone_part, validate_phone, validate_required, ValidationError, PHONE_PREFIX,
};

/// Editable state behind the address form.
///
/// `phone_number` always starts with [`PHONE_PREFIX`]; use
/// [`AddressFormState::set_phone_digits`] to change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFormState {
    pub full_name: String,
    pub phone_number: String,
    pub house_number: String,
    pub locality: String,
    pub pincode: String,
    pub state: String,
    pub city: String,
    pub instructions: String,
    pub address_type: FormAddressType,
}

impl Default for AddressFormState {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone_number: PHONE_PREFIX.to_string(),
            house_number: String::new(),
            locality: String::new(),
            pincode: String::new(),
            state: String::new(),
            city: String::new(),
            instructions: String::new(),
            address_type: FormAddressType::default(),
        }
    }
}

impl AddressFormState {
    /// Empty form for adding a new address.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form from a server record for editing.
    ///
    /// The selector only offers `Home` and `Office`, so an `Other` (or any
    /// unrecognized) address comes back as `Home`.
    pub fn from_raw(raw: &RawAddress) -> Self {
        let mut form = Self {
            full_name: raw.name().unwrap_or_default(),
            house_number: raw.line1().unwrap_or_default(),
            locality: raw.line2().unwrap_or_default(),
            pincode: raw.pincode().unwrap_or_default(),
            state: raw.state().unwrap_or_default(),
            city: raw.city().unwrap_or_default(),
            instructions: raw.instructions().unwrap_or_default(),
            address_type: raw
                .first_of(EDIT_TYPE_KEYS)
                .map(|label| FormAddressType::from_server_label(&label))
                .unwrap_or_default(),
            ..Self::default()
        };
        form.set_phone_digits(&raw.phone().unwrap_or_default());
        form
    }

    /// Replace the phone number, keeping the fixed prefix.
    pub fn set_phone_digits(&mut self, input: &str) {
        self.phone_number = format!("{}{}", PHONE_PREFIX, local_phone_part(input));
    }

    /// The seven fields that must be filled, with their display names.
    pub fn required_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("full name", self.full_name.as_str()),
            ("phone number", self.phone_number.as_str()),
            ("house number", self.house_number.as_str()),
            ("locality", self.locality.as_str()),
            ("pincode", self.pincode.as_str()),
            ("state", self.state.as_str()),
            ("city", self.city.as_str()),
        ]
    }

    /// Whether every required field is non-blank.
    pub fn is_valid(&self) -> bool {
        self.required_fields()
            .iter()
            .all(|(_, value)| !value.trim().is_empty())
    }

    /// Full pre-submit check: required fields first, then the phone number.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in self.required_fields() {
            validate_required(field, value)?;
        }
        validate_phone(&self.phone_number)?;
        Ok(())
    }

    /// Validate and build the create/update request body.
    pub fn to_payload(&self) -> Result<AddressPayload, ValidationError> {
        self.validate()?;

        Ok(AddressPayload {
            title: self.address_type.api_title().to_string(),
            full_name: self.full_name.trim().to_string(),
            phone: self.phone_number.trim().to_string(),
            building: self.house_number.trim().to_string(),
            locality: self.locality.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
            instructions: self.instructions.trim().to_string(),
            latitude: None,
            longitude: None,
            is_default: false,
        })
    }
}

/// Whether every required field of `state` is non-blank.
pub fn is_form_valid(state: &AddressFormState) -> bool {
    state.is_valid()
}

/// Server title for an arbitrary selector label.
///
/// Labels other than `Home` and `Office` only arrive when the two-button
/// selector is bypassed; they are sent as `Other`.
pub fn api_title_for_label(label: &str) -> &'static str {
    FormAddressType::from_ui_label(label)
        .map(FormAddressType::api_title)
        .unwrap_or("Other")
}

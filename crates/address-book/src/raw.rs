//! Loosely typed address records as returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys that may hold the recipient's name, in lookup order.
pub const NAME_KEYS: &[&str] = &["full_name", "name", "contact_name", "recipient_name"];

/// Keys that may hold the contact phone number.
pub const PHONE_KEYS: &[&str] = &["phone", "mobile", "contact_phone", "phone_number"];

/// Keys that may hold the first street line (house/building).
pub const LINE1_KEYS: &[&str] = &[
    "address_line_1",
    "address_line1",
    "addressLine1",
    "building",
    "house_number",
];

/// Keys that may hold the second street line (locality/area).
pub const LINE2_KEYS: &[&str] = &[
    "address_line_2",
    "address_line2",
    "addressLine2",
    "locality",
    "area",
];

/// Keys that may hold the postal code.
pub const PINCODE_KEYS: &[&str] = &["pincode", "postal_code", "zip_code", "zip"];

/// Keys that may hold the address type, for display.
pub const TYPE_KEYS: &[&str] = &["address_type", "type", "label"];

/// Keys consulted for the address type when pre-filling the edit form.
///
/// `title` comes first since it is the field create/update requests write.
pub const EDIT_TYPE_KEYS: &[&str] = &["title", "address_type", "type", "label"];

/// Keys that may hold delivery instructions.
pub const INSTRUCTIONS_KEYS: &[&str] = &["instructions", "delivery_instructions"];

/// An address object whose shape is not under our control.
///
/// Every accessor walks a chain of alternate key spellings and returns the
/// first populated value. Strings are trimmed, numbers are stringified, and
/// null, booleans, nested values and blank strings all count as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAddress(Value);

impl RawAddress {
    /// Wrap a JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying JSON.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Look up a single key.
    pub fn field(&self, key: &str) -> Option<String> {
        let text = match self.0.as_object()?.get(key)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Return the first populated value among `keys`.
    pub fn first_of(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.field(key))
    }

    pub fn id(&self) -> Option<String> {
        self.field("id")
    }

    pub fn name(&self) -> Option<String> {
        self.first_of(NAME_KEYS)
    }

    pub fn phone(&self) -> Option<String> {
        self.first_of(PHONE_KEYS)
    }

    pub fn line1(&self) -> Option<String> {
        self.first_of(LINE1_KEYS)
    }

    pub fn line2(&self) -> Option<String> {
        self.first_of(LINE2_KEYS)
    }

    pub fn city(&self) -> Option<String> {
        self.field("city")
    }

    pub fn state(&self) -> Option<String> {
        self.field("state")
    }

    pub fn pincode(&self) -> Option<String> {
        self.first_of(PINCODE_KEYS)
    }

    pub fn instructions(&self) -> Option<String> {
        self.first_of(INSTRUCTIONS_KEYS)
    }
}

impl From<Value> for RawAddress {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_of_respects_order() {
        let raw = RawAddress::new(json!({
            "name": "Second",
            "full_name": "First",
        }));
        assert_eq!(raw.name(), Some("First".to_string()));
    }

    #[test]
    fn test_blank_and_null_are_absent() {
        let raw = RawAddress::new(json!({
            "full_name": "   ",
            "name": null,
            "contact_name": "Asha",
        }));
        assert_eq!(raw.name(), Some("Asha".to_string()));
    }

    #[test]
    fn test_numbers_are_stringified() {
        let raw = RawAddress::new(json!({ "id": 42, "pincode": 560001 }));
        assert_eq!(raw.id(), Some("42".to_string()));
        assert_eq!(raw.pincode(), Some("560001".to_string()));
    }

    #[test]
    fn test_non_object_has_no_fields() {
        let raw = RawAddress::new(json!("not an address"));
        assert!(raw.id().is_none());
        assert!(raw.name().is_none());
    }

    #[test]
    fn test_camel_case_line_key() {
        let raw = RawAddress::new(json!({ "addressLine1": "12 MG Road" }));
        assert_eq!(raw.line1(), Some("12 MG Road".to_string()));
    }
}

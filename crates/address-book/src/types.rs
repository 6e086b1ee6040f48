//! Canonical address types shared by the listing, form and client layers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::raw::RawAddress;

/// Address type as stored by the server.
///
/// Known labels are matched case-insensitively (`office` is folded into
/// `Work`); anything else is carried through verbatim as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressType {
    Home,
    Work,
    Other,
    Custom(String),
}

impl AddressType {
    /// Resolve a server label.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "home" => Self::Home,
            "work" | "office" => Self::Work,
            "other" => Self::Other,
            _ => Self::Custom(label.to_string()),
        }
    }

    /// Label as shown to the user.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work",
            Self::Other => "Other",
            Self::Custom(label) => label,
        }
    }

    /// Whether the edit form's Home/Office selector can hold this type.
    ///
    /// Anything else is saved as `Home` once the address is edited.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Home | Self::Work)
    }

    /// Icon name for the list row.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            _ => "location-on",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AddressType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AddressType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

/// The two address types the edit form lets a user pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormAddressType {
    #[default]
    Home,
    Office,
}

impl FormAddressType {
    /// Parse a selector label. Only `Home` and `Office` are selectable.
    pub fn from_ui_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "home" => Some(Self::Home),
            "office" => Some(Self::Office),
            _ => None,
        }
    }

    /// Map a server type label back onto the selector.
    ///
    /// `Work` and `Office` select `Office`; everything else, `Other`
    /// included, falls back to `Home`.
    pub fn from_server_label(label: &str) -> Self {
        match AddressType::from_label(label) {
            AddressType::Work => Self::Office,
            _ => Self::Home,
        }
    }

    /// Server value submitted as the payload `title`.
    pub fn api_title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Office => "Work",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Office => "Office",
        }
    }
}

impl fmt::Display for FormAddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A display-ready address built from one [`RawAddress`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAddress {
    /// Server id, or `address-{index}` when the server sent none.
    pub id: String,
    pub name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub mobile: String,
    #[serde(rename = "type")]
    pub kind: AddressType,
    pub icon: &'static str,
    /// The record this was built from, kept for the edit form.
    pub raw: RawAddress,
}

/// Request body for creating or updating an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressPayload {
    pub title: String,
    pub full_name: String,
    pub phone: String,
    pub building: String,
    pub locality: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub instructions: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_type_from_label() {
        assert_eq!(AddressType::from_label("home"), AddressType::Home);
        assert_eq!(AddressType::from_label("OFFICE"), AddressType::Work);
        assert_eq!(AddressType::from_label("Work"), AddressType::Work);
        assert_eq!(AddressType::from_label("other"), AddressType::Other);
        assert_eq!(
            AddressType::from_label("Parents"),
            AddressType::Custom("Parents".to_string())
        );
    }

    #[test]
    fn test_address_type_icon() {
        assert_eq!(AddressType::Home.icon(), "home");
        assert_eq!(AddressType::Work.icon(), "work");
        assert_eq!(AddressType::Other.icon(), "location-on");
        assert_eq!(AddressType::Custom("Gym".into()).icon(), "location-on");
    }

    #[test]
    fn test_address_type_is_selectable() {
        assert!(AddressType::Home.is_selectable());
        assert!(AddressType::Work.is_selectable());
        assert!(!AddressType::Other.is_selectable());
        assert!(!AddressType::Custom("Parents".into()).is_selectable());
    }

    #[test]
    fn test_address_type_serializes_as_label() {
        let json = serde_json::to_string(&AddressType::Work).unwrap();
        assert_eq!(json, "\"Work\"");

        let parsed: AddressType = serde_json::from_str("\"office\"").unwrap();
        assert_eq!(parsed, AddressType::Work);
    }

    #[test]
    fn test_form_type_mappings() {
        assert_eq!(FormAddressType::Home.api_title(), "Home");
        assert_eq!(FormAddressType::Office.api_title(), "Work");

        assert_eq!(FormAddressType::from_server_label("Home"), FormAddressType::Home);
        assert_eq!(FormAddressType::from_server_label("Work"), FormAddressType::Office);
        assert_eq!(FormAddressType::from_server_label("office"), FormAddressType::Office);
        assert_eq!(FormAddressType::from_server_label("Other"), FormAddressType::Home);

        assert_eq!(FormAddressType::from_ui_label("Office"), Some(FormAddressType::Office));
        assert_eq!(FormAddressType::from_ui_label("Work"), None);
    }
}

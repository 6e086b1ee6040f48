//! Storefront address data layer.
//!
//! Backend address records arrive in many shapes (`full_name` or `name`,
//! `address_line_1` or `addressLine1`, `home`/`Office`/`Work` type labels).
//! This crate maps them onto a single display model and back into the form
//! used to add or edit an address:
//!
//! - [`normalize`] turns a [`RawAddress`] into a [`NormalizedAddress`]
//! - [`AddressFormState`] holds form input, validates it and builds the
//!   [`AddressPayload`] sent to the API
//! - [`AddressList`] keeps the fetched list and per-row delete markers
//!
//! Nothing here performs I/O; see the `address-client` crate for the HTTP side.
//!
//! # Example
//!
//! ```
//! use address_book::{normalize, AddressFormState, RawAddress};
//! use serde_json::json;
//!
//! let raw = RawAddress::new(json!({
//!     "id": 12,
//!     "name": "Asha Rao",
//!     "mobile": "9876543210",
//!     "addressLine1": "12 MG Road",
//!     "city": "Bengaluru",
//!     "type": "OFFICE",
//! }));
//!
//! let address = normalize(&raw, 0);
//! assert_eq!(address.kind.as_str(), "Work");
//!
//! let form = AddressFormState::from_raw(&address.raw);
//! assert_eq!(form.phone_number, "+91 9876543210");
//! ```

pub mod form;
pub mod list;
pub mod normalize;
pub mod raw;
pub mod types;
pub mod validation;

pub use form::{api_title_for_label, is_form_valid, AddressFormState};
pub use list::AddressList;
pub use normalize::{extract_items, normalize, normalize_all, MOBILE_PLACEHOLDER, NAME_PLACEHOLDER};
pub use raw::RawAddress;
pub use types::{AddressPayload, AddressType, FormAddressType, NormalizedAddress};
pub use validation::{validate_phone, ValidationError, PHONE_PREFIX};

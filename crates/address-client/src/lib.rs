//! Storefront address API client library.
//!
//! This crate provides a Rust client for the storefront's address resource
//! over HTTP. It supports:
//!
//! - Listing, creating, updating and deleting addresses
//! - Fetching the list already normalized for display
//! - Extracting user-facing messages from API errors
//!
//! # Example
//!
//! ```no_run
//! use address_book::AddressFormState;
//! use address_client::{AddressClient, ClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AddressClient::new(ClientConfig::from_env()?)?;
//!
//! for address in client.fetch_addresses().await? {
//!     println!("{} ({}): {}", address.name, address.kind, address.address_line1);
//! }
//!
//! let mut form = AddressFormState::new();
//! form.full_name = "Asha Rao".into();
//! form.set_phone_digits("9876543210");
//! form.house_number = "12 MG Road".into();
//! form.locality = "Indiranagar".into();
//! form.pincode = "560038".into();
//! form.state = "Karnataka".into();
//! form.city = "Bengaluru".into();
//!
//! match client.create(&form.to_payload()?).await {
//!     Ok(created) => println!("Created: {}", created),
//!     Err(e) => eprintln!("{}", e.user_message()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::AddressClient;
pub use config::ClientConfig;
pub use error::{ApiError, FALLBACK_MESSAGE};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

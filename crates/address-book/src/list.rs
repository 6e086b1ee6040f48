//! In-memory address list behind the listing screen.

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::normalize::{extract_items, normalize_all};
use crate::types::NormalizedAddress;

/// Addresses from the latest fetch, plus the rows currently being deleted.
///
/// Nothing here is persisted; every refetch replaces the list wholesale.
#[derive(Debug, Default)]
pub struct AddressList {
    addresses: Vec<NormalizedAddress>,
    deleting: HashSet<String>,
}

impl AddressList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from a list response body.
    pub fn from_response(body: &Value) -> Self {
        let mut list = Self::new();
        list.replace(body);
        list
    }

    /// Replace the contents with a fresh list response.
    ///
    /// Delete markers survive only for rows that are still present.
    pub fn replace(&mut self, body: &Value) {
        self.addresses = normalize_all(&extract_items(body));
        let ids: HashSet<&str> = self.addresses.iter().map(|a| a.id.as_str()).collect();
        self.deleting.retain(|id| ids.contains(id.as_str()));
        debug!(count = self.addresses.len(), "Address list replaced");
    }

    pub fn addresses(&self) -> &[NormalizedAddress] {
        &self.addresses
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&NormalizedAddress> {
        self.addresses.iter().find(|a| a.id == id)
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    /// Mark a row as being deleted.
    ///
    /// Returns `false` if the row is unknown or already being deleted, in
    /// which case the caller must not issue another delete. Different rows
    /// can be marked at the same time.
    pub fn begin_delete(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.deleting.insert(id.to_string())
    }

    /// Clear the delete marker and, on success, splice the row out.
    pub fn finish_delete(&mut self, id: &str, succeeded: bool) -> Option<NormalizedAddress> {
        self.deleting.remove(id);
        if !succeeded {
            return None;
        }

        let pos = self.addresses.iter().position(|a| a.id == id)?;
        Some(self.addresses.remove(pos))
    }
}

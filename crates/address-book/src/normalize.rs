//! Mapping of arbitrary backend address shapes onto [`NormalizedAddress`].

use serde_json::Value;
use tracing::debug;

use crate::raw::{RawAddress, TYPE_KEYS};
use crate::types::{AddressType, NormalizedAddress};

/// Shown when no name key is populated.
pub const NAME_PLACEHOLDER: &str = "Name not provided";

/// Shown when no phone key is populated.
pub const MOBILE_PLACEHOLDER: &str = "Not provided";

/// Normalize one raw address found at `index` in a list response.
///
/// Never fails: missing data becomes placeholder text and a missing id is
/// synthesized from `index`, which only keeps it stable within one response.
pub fn normalize(raw: &RawAddress, index: usize) -> NormalizedAddress {
    let city = raw.city();
    let state = raw.state();

    let candidates: Vec<String> = [raw.line1(), raw.line2(), city.clone(), state.clone(), raw.pincode()]
        .into_iter()
        .flatten()
        .collect();

    let address_line1 = candidates.first().cloned().unwrap_or_default();
    let address_line2 = join_lines(candidates.iter().skip(1).take(2));
    let mut address_line3 = join_lines(candidates.iter().skip(3));
    if address_line3.is_empty() {
        address_line3 = join_lines([city, state].iter().flatten()).trim().to_string();
    }

    let label = raw.first_of(TYPE_KEYS).unwrap_or_else(|| "Other".to_string());
    let kind = AddressType::from_label(&label);

    let id = raw.id().unwrap_or_else(|| {
        debug!(index, "Address has no id, synthesizing one");
        format!("address-{}", index)
    });

    NormalizedAddress {
        id,
        name: raw.name().unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
        address_line1,
        address_line2,
        address_line3,
        mobile: raw.phone().unwrap_or_else(|| MOBILE_PLACEHOLDER.to_string()),
        icon: kind.icon(),
        kind,
        raw: raw.clone(),
    }
}

/// Normalize every item of a list, using list positions as fallback ids.
pub fn normalize_all(items: &[RawAddress]) -> Vec<NormalizedAddress> {
    items
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize(raw, index))
        .collect()
}

/// Pull the raw items out of a list response.
///
/// Accepts a bare array, `{"results": [...]}` or `{"data": [...]}`. Any other
/// shape yields an empty list.
pub fn extract_items(body: &Value) -> Vec<RawAddress> {
    let items = match body {
        Value::Array(items) => Some(items),
        Value::Object(map) => ["results", "data"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    };

    match items {
        Some(items) => items.iter().cloned().map(RawAddress::new).collect(),
        None => {
            debug!("List response had no recognizable address array");
            Vec::new()
        }
    }
}

fn join_lines<'a>(parts: impl IntoIterator<Item = &'a String>) -> String {
    parts
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawAddress {
        RawAddress::new(value)
    }

    #[test]
    fn test_full_address_lines() {
        let address = normalize(
            &raw(json!({
                "id": 7,
                "full_name": "Asha Rao",
                "phone": "9876543210",
                "address_line_1": "12 MG Road",
                "address_line_2": "Indiranagar",
                "city": "Bengaluru",
                "state": "Karnataka",
                "pincode": "560038",
                "address_type": "home",
            })),
            0,
        );

        assert_eq!(address.id, "7");
        assert_eq!(address.name, "Asha Rao");
        assert_eq!(address.mobile, "9876543210");
        assert_eq!(address.address_line1, "12 MG Road");
        assert_eq!(address.address_line2, "Indiranagar, Bengaluru");
        assert_eq!(address.address_line3, "Karnataka, 560038");
        assert_eq!(address.kind, AddressType::Home);
        assert_eq!(address.icon, "home");
    }

    #[test]
    fn test_missing_lines_shift_up() {
        let address = normalize(
            &raw(json!({
                "building": "Flat 4B",
                "city": "Pune",
                "state": "Maharashtra",
            })),
            0,
        );

        assert_eq!(address.address_line1, "Flat 4B");
        assert_eq!(address.address_line2, "Pune, Maharashtra");
        // Nothing left over, so line 3 falls back to city and state.
        assert_eq!(address.address_line3, "Pune, Maharashtra");
    }

    #[test]
    fn test_line3_fallback_without_state() {
        let address = normalize(&raw(json!({ "city": "Chennai" })), 0);
        assert_eq!(address.address_line1, "Chennai");
        assert_eq!(address.address_line2, "");
        assert_eq!(address.address_line3, "Chennai");
    }

    #[test]
    fn test_line3_fallback_without_city() {
        let address = normalize(&raw(json!({ "building": "Villa 3", "state": "Goa" })), 0);
        assert_eq!(address.address_line1, "Villa 3");
        assert_eq!(address.address_line2, "Goa");
        assert_eq!(address.address_line3, "Goa");

        let address = normalize(&raw(json!({ "state": "Goa" })), 0);
        assert_eq!(address.address_line2, "");
        assert_eq!(address.address_line3, "Goa");
    }

    #[test]
    fn test_empty_record_uses_placeholders() {
        let address = normalize(&raw(json!({})), 3);
        assert_eq!(address.id, "address-3");
        assert_eq!(address.name, NAME_PLACEHOLDER);
        assert_eq!(address.mobile, MOBILE_PLACEHOLDER);
        assert_eq!(address.address_line1, "");
        assert_eq!(address.address_line2, "");
        assert_eq!(address.address_line3, "");
        assert_eq!(address.kind, AddressType::Other);
        assert_eq!(address.icon, "location-on");
    }

    #[test]
    fn test_type_fallback_chain() {
        let address = normalize(&raw(json!({ "type": "Work", "label": "Home" })), 0);
        assert_eq!(address.kind, AddressType::Work);

        let address = normalize(&raw(json!({ "label": "Office" })), 0);
        assert_eq!(address.kind, AddressType::Work);
        assert_eq!(address.icon, "work");
    }

    #[test]
    fn test_unmapped_type_passes_through() {
        let address = normalize(&raw(json!({ "address_type": "Parents" })), 0);
        assert_eq!(address.kind, AddressType::Custom("Parents".to_string()));
        assert_eq!(address.icon, "location-on");
    }

    #[test]
    fn test_raw_is_kept() {
        let value = json!({ "id": "abc", "name": "Ravi" });
        let address = normalize(&raw(value.clone()), 0);
        assert_eq!(address.raw.as_value(), &value);
    }

    #[test]
    fn test_normalize_all_uses_positions() {
        let items = vec![raw(json!({ "id": 10 })), raw(json!({})), raw(json!({}))];
        let ids: Vec<_> = normalize_all(&items).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["10", "address-1", "address-2"]);
    }

    #[test]
    fn test_extract_items_shapes() {
        assert_eq!(extract_items(&json!([{ "id": 1 }, { "id": 2 }])).len(), 2);
        assert_eq!(extract_items(&json!({ "results": [{ "id": 1 }] })).len(), 1);
        assert_eq!(extract_items(&json!({ "data": [{ "id": 1 }, {}] })).len(), 2);
        assert!(extract_items(&json!({ "count": 0 })).is_empty());
        assert!(extract_items(&json!(null)).is_empty());
    }

    #[test]
    fn test_extract_items_skips_non_array_results() {
        let body = json!({ "results": "nope", "data": [{ "id": 5 }] });
        let items = extract_items(&body);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), Some("5".to_string()));
    }
}

//! Plain-text rendering of addresses.

use address_book::NormalizedAddress;

/// Render one address as an indented block.
pub fn format_address(address: &NormalizedAddress) -> String {
    let mut out = format!("[{}] {} ({}, {})\n", address.id, address.name, address.kind, address.icon);

    for line in [
        &address.address_line1,
        &address.address_line2,
        &address.address_line3,
    ] {
        if !line.is_empty() {
            out.push_str(&format!("    {}\n", line));
        }
    }

    out.push_str(&format!("    Mobile: {}\n", address.mobile));
    out
}

/// Render a whole list, or a hint when it is empty.
pub fn format_list(addresses: &[NormalizedAddress]) -> String {
    if addresses.is_empty() {
        return "No saved addresses.\n".to_string();
    }

    addresses
        .iter()
        .map(format_address)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use address_book::{normalize, RawAddress};
    use serde_json::json;

    #[test]
    fn test_format_address() {
        let address = normalize(
            &RawAddress::new(json!({
                "id": 3,
                "name": "Asha Rao",
                "phone": "9876543210",
                "building": "12 MG Road",
                "city": "Bengaluru",
                "type": "home",
            })),
            0,
        );

        assert_eq!(
            format_address(&address),
            "[3] Asha Rao (Home, home)\n    12 MG Road\n    Bengaluru\n    Bengaluru\n    Mobile: 9876543210\n"
        );
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_list(&[]), "No saved addresses.\n");
    }

    #[test]
    fn test_format_list_separates_entries() {
        let items = vec![
            RawAddress::new(json!({ "id": 1 })),
            RawAddress::new(json!({ "id": 2 })),
        ];
        let addresses = address_book::normalize_all(&items);
        let text = format_list(&addresses);
        assert!(text.contains("[1] Name not provided (Other, location-on)"));
        assert!(text.contains("\n\n[2] "));
    }
}

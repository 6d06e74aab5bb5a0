//! Address-suggestion capability for the setup form.
//!
//! Suggestions are an optional capability injected once at startup.
//! When no real lookup is available the null object keeps the address
//! field working as a plain text input: empty suggestion lists, no
//! failures, and submission never blocked.

use serde::{Deserialize, Serialize};

/// Queries shorter than this are never forwarded to a lookup.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSuggestion {
    pub id: String,
    pub description: String,
}

pub trait AddressLookup {
    fn suggest(&self, query: &str) -> Vec<AddressSuggestion>;
}

/// Guarded entry point: applies the minimum query length before
/// consulting the capability.
pub fn suggestions_for(lookup: &dyn AddressLookup, query: &str) -> Vec<AddressSuggestion> {
    if query.trim().len() < MIN_QUERY_LEN {
        return Vec::new();
    }
    lookup.suggest(query)
}

/// Fallback used when no geocoding capability is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAddressLookup;

impl AddressLookup for NullAddressLookup {
    fn suggest(&self, _query: &str) -> Vec<AddressSuggestion> {
        Vec::new()
    }
}

/// Canned US-address table standing in for a real geocoding service in
/// this mocked build.
#[derive(Debug, Clone, Default)]
pub struct DemoAddressLookup;

const DEMO_ADDRESSES: [(&str, &str); 8] = [
    ("demo-dallas-main", "123 Main St, Dallas, TX 75201"),
    ("demo-dallas-elm", "2500 Elm St, Dallas, TX 75226"),
    ("demo-fortworth-7th", "801 W 7th St, Fort Worth, TX 76102"),
    ("demo-plano-legacy", "5800 Legacy Dr, Plano, TX 75024"),
    ("demo-austin-congress", "1100 Congress Ave, Austin, TX 78701"),
    ("demo-houston-westheimer", "2800 Westheimer Rd, Houston, TX 77098"),
    ("demo-la-figueroa", "800 S Figueroa St, Los Angeles, CA 90017"),
    ("demo-phoenix-central", "455 N Central Ave, Phoenix, AZ 85004"),
];

impl AddressLookup for DemoAddressLookup {
    fn suggest(&self, query: &str) -> Vec<AddressSuggestion> {
        let needle = query.trim().to_ascii_lowercase();
        DEMO_ADDRESSES
            .iter()
            .filter(|(_, description)| description.to_ascii_lowercase().contains(&needle))
            .take(5)
            .map(|(id, description)| AddressSuggestion {
                id: id.to_string(),
                description: description.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_lookup_is_always_empty() {
        let lookup = NullAddressLookup;
        assert!(lookup.suggest("123 Main").is_empty());
        assert!(suggestions_for(&lookup, "123 Main St, Dallas").is_empty());
    }

    #[test]
    fn test_short_queries_are_not_forwarded() {
        let lookup = DemoAddressLookup;
        assert!(suggestions_for(&lookup, "12").is_empty());
        assert!(suggestions_for(&lookup, "  1  ").is_empty());
        assert!(!suggestions_for(&lookup, "Dallas").is_empty());
    }

    #[test]
    fn test_demo_lookup_matches_case_insensitively() {
        let lookup = DemoAddressLookup;
        let suggestions = lookup.suggest("dallas");
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions
            .iter()
            .all(|suggestion| suggestion.description.contains("Dallas")));
    }
}

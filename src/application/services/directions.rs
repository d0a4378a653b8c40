//! Map search links for venue addresses.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Characters escaped by URI component encoding.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encodes `value` as a URI component.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Returns the map search URL for `address`.
#[must_use]
pub fn maps_search_url(address: &str) -> String {
    format!("{MAPS_SEARCH_BASE}{}", encode_component(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_venue_address_url() {
        assert_eq!(
            maps_search_url("Khalihan Luxury Farm Stay cafe & Restaurant"),
            "https://www.google.com/maps/search/?api=1&query=Khalihan%20Luxury%20Farm%20Stay%20cafe%20%26%20Restaurant"
        );
    }

    #[test_case("a-b_c.d!e~f*g'h(i)j", "a-b_c.d!e~f*g'h(i)j" ; "unreserved_kept")]
    #[test_case("a/b?c=d#e", "a%2Fb%3Fc%3Dd%23e" ; "reserved_escaped")]
    #[test_case("a+b,c", "a%2Bb%2Cc" ; "plus_and_comma")]
    #[test_case("café", "caf%C3%A9" ; "utf8_bytes")]
    #[test_case("", "" ; "empty")]
    fn test_encode_component(input: &str, expected: &str) {
        assert_eq!(encode_component(input), expected);
    }
}

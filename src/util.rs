// Small pure helpers shared by components

/// Percent-encodes `input` the way JavaScript's `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Placeholder image shown when a card's own image fails to load.
pub fn placeholder_url(base: &str, title: &str) -> String {
    format!("{}?text={}", base, encode_uri_component(title))
}

/// Marks the placeholder as tried and reports whether this error should swap to it.
/// Only the first failure swaps; a failing placeholder is left alone.
pub fn take_fallback(swapped: &mut bool) -> bool {
    !std::mem::replace(swapped, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_unreserved() {
        assert_eq!(encode_uri_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
    }

    #[test]
    fn test_encode_reserved_and_spaces() {
        assert_eq!(encode_uri_component("Web App & API"), "Web%20App%20%26%20API");
        assert_eq!(encode_uri_component("a/b?c=d#e"), "a%2Fb%3Fc%3Dd%23e");
    }

    #[test]
    fn test_encode_multibyte_utf8() {
        assert_eq!(encode_uri_component("é"), "%C3%A9");
        assert_eq!(encode_uri_component("Toko 🛒"), "Toko%20%F0%9F%9B%92");
    }

    #[test]
    fn test_placeholder_url_contains_encoded_title() {
        let url = placeholder_url("https://placehold.co/600x400/e2e8f0/1e3a8a", "My Shop");
        assert_eq!(url, "https://placehold.co/600x400/e2e8f0/1e3a8a?text=My%20Shop");
    }

    #[test]
    fn test_fallback_swaps_only_once() {
        let mut swapped = false;
        assert!(take_fallback(&mut swapped));
        assert!(swapped);
        // placeholder failed too, even with a title the browser re-encodes
        assert!(!take_fallback(&mut swapped));
        assert!(!take_fallback(&mut swapped));
    }

    #[test]
    fn test_placeholder_url_leaves_apostrophe_unescaped() {
        let url = placeholder_url("/img/placeholder.png", "Joe's Cafe");
        assert_eq!(url, "/img/placeholder.png?text=Joe's%20Cafe");
    }
}

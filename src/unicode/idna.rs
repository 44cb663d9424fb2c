use crate::compat::String;
use crate::error::{ParseError, Result};

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4 && slice[..2].eq_ignore_ascii_case(b"xn") && &slice[2..4] == b"--"
}

/// Check if domain contains a Punycode label (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    is_punycode_prefix(bytes)
        || memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Convert a decoded domain to its lowercase ASCII form.
///
/// Plain ASCII without Punycode labels is only lowercased; everything else goes
/// through IDNA `ToASCII`, which also validates existing `xn--` labels.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    if domain.is_ascii() && !has_punycode(domain) {
        return Ok(domain.to_ascii_lowercase());
    }

    // A bare "xn--" label decodes to nothing
    if domain.split('.').any(|label| label.eq_ignore_ascii_case("xn--")) {
        return Err(ParseError::InvalidHost);
    }

    idna::domain_to_ascii(domain).map_err(|_| ParseError::InvalidHost)
}

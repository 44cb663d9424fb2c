use crate::error::{ParseError, Result};

/// Check if a host looks like a dotted-decimal IPv4 address.
/// Only ASCII digits and dots, with at least one dot; octet validity is checked later.
pub fn is_dotted_decimal(input: &str) -> bool {
    !input.is_empty()
        && input.contains('.')
        && input.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

/// Parse a port string to u16.
/// Returns `Ok(None)` for an empty port, an error for non-digits or out of range.
pub fn parse_port(port: &str) -> Result<Option<u16>> {
    if port.is_empty() {
        return Ok(None);
    }
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPort);
    }

    // Leading zeros are allowed and never overflow
    let significant = port.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(Some(0));
    }
    if significant.len() > 5 {
        return Err(ParseError::InvalidPort);
    }
    significant
        .parse::<u16>()
        .map(Some)
        .map_err(|_| ParseError::InvalidPort)
}

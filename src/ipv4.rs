/// Dotted-decimal IPv4 address parsing for special-scheme hosts
use crate::compat::{String, format};
use crate::error::{ParseError, Result};

/// Parse exactly four dot-separated decimal octets, each in [0, 255].
/// Leading zeros are read as decimal, never octal.
pub fn parse_ipv4(input: &str) -> Result<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = input.split('.');

    for octet in &mut octets {
        let part = parts.next().ok_or(ParseError::InvalidIpv4Octet)?;
        *octet = parse_octet(part)?;
    }

    if parts.next().is_some() {
        return Err(ParseError::InvalidIpv4Octet);
    }
    Ok(octets)
}

fn parse_octet(part: &str) -> Result<u8> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIpv4Octet);
    }
    part.parse::<u8>().map_err(|_| ParseError::InvalidIpv4Octet)
}

/// Serialize an IPv4 address to dotted decimal notation
pub fn serialize_ipv4(octets: [u8; 4]) -> String {
    let [a, b, c, d] = octets;
    format!("{a}.{b}.{c}.{d}")
}

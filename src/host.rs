//! Host classification: domain, IPv4, IPv6, opaque, or absent.

use crate::character_sets::{is_forbidden_domain_code_point, is_forbidden_host_code_point};
use crate::checkers::is_dotted_decimal;
use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::ipv6::{parse_ipv6, serialize_ipv6};
use crate::types::SchemeType;
use crate::unicode::idna::domain_to_ascii;
use crate::unicode::percent_encode::{self, EncodeSet};

/// The host of a URL
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Host {
    /// Lowercase ASCII domain (empty only for `file:` URLs)
    Domain(String),
    /// IPv4 address octets
    Ipv4([u8; 4]),
    /// IPv6 address groups
    Ipv6([u16; 8]),
    /// Host of a non-special URL, kept percent-encoded and case-preserved
    Opaque(String),
    /// No authority (non-special URLs only)
    #[default]
    Absent,
}

impl Host {
    /// Check if the URL had no authority
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Check if the host serializes to the empty string
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Domain(s) | Self::Opaque(s) => s.is_empty(),
            Self::Ipv4(_) | Self::Ipv6(_) => false,
            Self::Absent => true,
        }
    }

    /// Serialized host text; `None` when absent
    pub fn serialize(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Domain(s) | Self::Opaque(s) => Some(Cow::Borrowed(s)),
            Self::Ipv4(octets) => Some(Cow::Owned(serialize_ipv4(*octets))),
            Self::Ipv6(groups) => {
                let mut s = String::with_capacity(41);
                s.push('[');
                s.push_str(&serialize_ipv6(groups));
                s.push(']');
                Some(Cow::Owned(s))
            }
            Self::Absent => None,
        }
    }
}

impl core::fmt::Display for Host {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.serialize() {
            Some(s) => f.write_str(&s),
            None => Ok(()),
        }
    }
}

/// Parse the host substring of an authority.
///
/// Bracketed input is an IPv6 literal under any scheme. Special schemes decode
/// and validate a domain (or dotted-decimal IPv4); non-special schemes get an
/// opaque host.
pub fn parse_host(input: &str, scheme_type: SchemeType) -> Result<Host> {
    if let Some(inner) = input.strip_prefix('[') {
        let inner = inner
            .strip_suffix(']')
            .ok_or(ParseError::InvalidIpv6Literal)?;
        return parse_ipv6(inner).map(Host::Ipv6);
    }

    if scheme_type.is_special() {
        parse_special_host(input, scheme_type)
    } else {
        parse_opaque_host(input)
    }
}

fn parse_special_host(input: &str, scheme_type: SchemeType) -> Result<Host> {
    let bytes = percent_encode::decode(input);
    let decoded = String::from_utf8(bytes).map_err(|_| ParseError::InvalidHost)?;

    if is_dotted_decimal(&decoded) {
        return parse_ipv4(&decoded).map(Host::Ipv4);
    }

    if decoded.chars().any(is_forbidden_domain_code_point) {
        return Err(ParseError::ForbiddenHostCodePoint);
    }

    let ascii = domain_to_ascii(&decoded)?;
    // Compatibility mappings can produce forbidden ASCII (U+2100 becomes "a/c")
    if ascii.chars().any(is_forbidden_domain_code_point) {
        return Err(ParseError::ForbiddenHostCodePoint);
    }

    if scheme_type == SchemeType::File && (ascii.is_empty() || ascii == "localhost") {
        return Ok(Host::Domain(String::new()));
    }
    validate_labels(&ascii)?;

    // IDNA can map full-width digits to a dotted-decimal form
    if is_dotted_decimal(&ascii) {
        return parse_ipv4(&ascii).map(Host::Ipv4);
    }
    Ok(Host::Domain(ascii))
}

/// Reject empty labels; a single trailing root dot is allowed.
fn validate_labels(domain: &str) -> Result<()> {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.is_empty() || domain.split('.').any(str::is_empty) {
        return Err(ParseError::InvalidHost);
    }
    Ok(())
}

fn parse_opaque_host(input: &str) -> Result<Host> {
    if input.chars().any(is_forbidden_host_code_point) {
        return Err(ParseError::ForbiddenHostCodePoint);
    }
    Ok(Host::Opaque(percent_encode::encode(input, EncodeSet::Host)))
}

impl From<[u8; 4]> for Host {
    fn from(octets: [u8; 4]) -> Self {
        Self::Ipv4(octets)
    }
}

impl From<[u16; 8]> for Host {
    fn from(groups: [u16; 8]) -> Self {
        Self::Ipv6(groups)
    }
}

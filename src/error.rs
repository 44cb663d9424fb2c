/// Errors that can occur during URL parsing
///
/// Exactly one kind is reported per failed parse; no partial URL is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Scheme does not start with an ASCII letter, or contains an invalid character
    InvalidScheme,
    /// No scheme and no usable base URL to resolve against
    MissingScheme,
    /// Host is empty where one is required, has an empty label, or fails IDNA
    InvalidHost,
    /// Host contains a forbidden code point
    ForbiddenHostCodePoint,
    /// Port contains a non-digit or exceeds 65535
    InvalidPort,
    /// Malformed bracketed IPv6 address
    InvalidIpv6Literal,
    /// Dotted-decimal host with a missing or out-of-range octet
    InvalidIpv4Octet,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::MissingScheme => "Missing scheme (relative URL without base)",
            Self::InvalidHost => "Invalid host",
            Self::ForbiddenHostCodePoint => "Forbidden host code point",
            Self::InvalidPort => "Invalid port",
            Self::InvalidIpv6Literal => "Invalid IPv6 literal",
            Self::InvalidIpv4Octet => "Invalid IPv4 octet",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;

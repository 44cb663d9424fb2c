use crate::compat::{String, ToString, Vec};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Encode sets follow the WHATWG URL percent-encoded bytes section

/// C0 control percent-encode set (also covers DEL and every non-ASCII byte)
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Query percent-encode set (non-special URLs)
/// C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Special-query percent-encode set (special URLs): query set + '
pub const SPECIAL_QUERY_SET: &AsciiSet = &QUERY_SET.add(b'\'');

/// Path percent-encode set
/// Query + ?, ^, \`, {, }
pub const PATH_SET: &AsciiSet = &QUERY_SET
    .add(b'?')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Userinfo percent-encode set
/// Path + /, :, ;, =, @, [, \, ], |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'|');

/// Component-specific escape sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodeSet {
    /// C0 controls, DEL and non-ASCII only (opaque paths)
    C0Control,
    /// Username and password
    Userinfo,
    /// Opaque hosts of non-special schemes
    Host,
    /// Path segments
    Path,
    /// Query of a non-special URL
    Query,
    /// Query of a special URL
    SpecialQuery,
    /// Fragment
    Fragment,
}

impl EncodeSet {
    /// Get the underlying `AsciiSet`
    pub fn ascii_set(self) -> &'static AsciiSet {
        match self {
            Self::C0Control | Self::Host => C0_CONTROL_SET,
            Self::Userinfo => USERINFO_SET,
            Self::Path => PATH_SET,
            Self::Query => QUERY_SET,
            Self::SpecialQuery => SPECIAL_QUERY_SET,
            Self::Fragment => FRAGMENT_SET,
        }
    }
}

/// Percent-encode every byte of `input` outside the allowed set.
/// Existing `%` signs are kept, so already-escaped input is stable.
pub fn encode(input: &str, set: EncodeSet) -> String {
    utf8_percent_encode(input, set.ascii_set()).to_string()
}

/// Write percent-encoded string directly to buffer
pub fn encode_into(buffer: &mut String, input: &str, set: EncodeSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, set.ascii_set()) {
        buffer.push_str(chunk);
    }
}

/// Decode `%XX` triplets into raw bytes.
/// Truncated or non-hex triplets pass through literally.
pub fn decode(input: &str) -> Vec<u8> {
    percent_encoding::percent_decode_str(input).collect()
}

/// Decode for display, replacing invalid UTF-8 sequences
pub fn decode_utf8_lossy(input: &str) -> String {
    percent_encoding::percent_decode_str(input)
        .decode_utf8_lossy()
        .into_owned()
}

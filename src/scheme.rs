use crate::types::SchemeType;

/// Look up a scheme in the special-scheme table, ignoring ASCII case.
/// Filters by length + first byte before the full comparison.
pub fn lookup(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first().map(u8::to_ascii_lowercase)) {
        (2, Some(b'w')) if bytes.eq_ignore_ascii_case(b"ws") => SchemeType::Ws,
        (3, Some(b'w')) if bytes.eq_ignore_ascii_case(b"wss") => SchemeType::Wss,
        (3, Some(b'f')) if bytes.eq_ignore_ascii_case(b"ftp") => SchemeType::Ftp,
        (4, Some(b'h')) if bytes.eq_ignore_ascii_case(b"http") => SchemeType::Http,
        (4, Some(b'f')) if bytes.eq_ignore_ascii_case(b"file") => SchemeType::File,
        (5, Some(b'h')) if bytes.eq_ignore_ascii_case(b"https") => SchemeType::Https,
        _ => SchemeType::NotSpecial,
    }
}

/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// Check if a byte may appear in a scheme after its first letter
pub fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Host code point classification
/// Bit 0 = forbidden in opaque hosts, bit 1 = forbidden in domains
const HOST_CHAR_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];

    // C0 controls and DEL: domains reject all of them
    let mut i = 0;
    while i < 0x20 {
        table[i] = 2;
        i += 1;
    }
    table[0x7F] = 2;

    // Shared forbidden host code points
    table[0x00] = 3;
    table[b'\t' as usize] = 3;
    table[b'\n' as usize] = 3;
    table[b'\r' as usize] = 3;
    let shared = b" #/:<>?@[\\]^|";
    let mut i = 0;
    while i < shared.len() {
        table[shared[i] as usize] = 3;
        i += 1;
    }

    // Domain-only
    table[b'%' as usize] = 2;

    table
};

/// Forbidden host code point (applies to opaque hosts of non-special schemes)
pub fn is_forbidden_host_code_point(c: char) -> bool {
    c.is_ascii() && HOST_CHAR_TABLE[c as usize] & 1 != 0
}

/// Forbidden domain code point (forbidden host code points + C0, `%`, DEL)
pub fn is_forbidden_domain_code_point(c: char) -> bool {
    c.is_ascii() && HOST_CHAR_TABLE[c as usize] & 2 != 0
}

/// Percent-encoded spellings of `.` in a path segment
pub fn is_single_dot_segment(segment: &str) -> bool {
    segment == "." || segment.eq_ignore_ascii_case("%2e")
}

/// `..`, `.%2e`, `%2e.`, `%2e%2e` in any case
pub fn is_double_dot_segment(segment: &str) -> bool {
    match segment.len() {
        2 => segment == "..",
        4 => {
            let lower = segment.as_bytes();
            (lower[0] == b'.' && lower[1..].eq_ignore_ascii_case(b"%2e"))
                || (lower[..3].eq_ignore_ascii_case(b"%2e") && lower[3] == b'.')
        }
        6 => segment.eq_ignore_ascii_case("%2e%2e"),
        _ => false,
    }
}

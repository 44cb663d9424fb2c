use crate::character_sets::is_ascii_tab_or_newline;
use crate::compat::Cow;

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Find the first byte at or after `from` that is one of the given delimiters.
/// Returns `bytes.len()` when none is found.
pub fn find_delimiter(bytes: &[u8], from: usize, delimiters: &[u8]) -> usize {
    let tail = bytes.get(from..).unwrap_or_default();
    let found = match *delimiters {
        [a] => memchr::memchr(a, tail),
        [a, b] => memchr::memchr2(a, b, tail),
        [a, b, c] => memchr::memchr3(a, b, c, tail),
        _ => tail.iter().position(|b| delimiters.contains(b)),
    };
    found.map_or(bytes.len(), |pos| from + pos)
}

/// Trim leading/trailing C0 controls and spaces, then drop embedded tabs/newlines.
/// Returns a Cow to avoid allocation when possible.
pub fn clean_tabs_and_newlines(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim_matches(|c: char| c <= ' ');

    if !has_tabs_or_newline(trimmed) {
        return Cow::Borrowed(trimmed);
    }

    Cow::Owned(
        trimmed
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect(),
    )
}

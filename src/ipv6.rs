/// IPv6 literal parsing and serialization
use crate::compat::{String, Vec};
use crate::error::{ParseError, Result};
use crate::ipv4::parse_ipv4;
use core::fmt::Write;

/// Parse the text between the brackets of an IPv6 host (e.g. "`2001:db8::1`").
/// Returns the 8 u16 groups, or `InvalidIpv6Literal` if malformed.
pub fn parse_ipv6(input: &str) -> Result<[u16; 8]> {
    // Zone identifiers are not allowed in URLs
    if input.is_empty() || input.contains('%') {
        return Err(ParseError::InvalidIpv6Literal);
    }

    // Embedded IPv4 tail (e.g. "::ffff:192.168.1.1") fills the last two groups
    match input.rfind(':') {
        Some(pos) if input[pos + 1..].contains('.') => {
            let [a, b, c, d] =
                parse_ipv4(&input[pos + 1..]).map_err(|_| ParseError::InvalidIpv6Literal)?;
            let head = match &input[..pos] {
                // "::1.2.3.4" leaves a single ':' before the tail
                ":" => "::",
                head if head.ends_with(':') => &input[..=pos],
                head => head,
            };
            let mut groups = [0u16; 8];
            fill_groups(head, &mut groups[..6])?;
            groups[6] = u16::from_be_bytes([a, b]);
            groups[7] = u16::from_be_bytes([c, d]);
            Ok(groups)
        }
        _ => {
            let mut groups = [0u16; 8];
            fill_groups(input, &mut groups)?;
            Ok(groups)
        }
    }
}

/// Fill `groups` from colon-separated hex groups with at most one `::` run.
fn fill_groups(input: &str, groups: &mut [u16]) -> Result<()> {
    let Some(compress_pos) = input.find("::") else {
        // No compression: every group must be spelled out
        let parsed = parse_groups(input)?;
        if parsed.len() != groups.len() {
            return Err(ParseError::InvalidIpv6Literal);
        }
        groups.copy_from_slice(&parsed);
        return Ok(());
    };

    let before = parse_groups(&input[..compress_pos])?;
    let after = parse_groups(&input[compress_pos + 2..])?;

    // "::" stands for at least one zero group
    if before.len() + after.len() >= groups.len() {
        return Err(ParseError::InvalidIpv6Literal);
    }

    groups[..before.len()].copy_from_slice(&before);
    let after_start = groups.len() - after.len();
    groups[after_start..].copy_from_slice(&after);
    Ok(())
}

/// Parse colon-separated hex groups; an empty string has no groups.
fn parse_groups(s: &str) -> Result<Vec<u16>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(':').map(parse_hex_group).collect()
}

/// Parse a single group of 1 to 4 hex digits
fn parse_hex_group(s: &str) -> Result<u16> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidIpv6Literal);
    }
    u16::from_str_radix(s, 16).map_err(|_| ParseError::InvalidIpv6Literal)
}

/// Serialize IPv6 groups with the longest zero run (2+ groups) compressed.
/// Brackets are not included.
pub fn serialize_ipv6(groups: &[u16; 8]) -> String {
    let compress = find_longest_zero_run(groups).filter(|run| run.len() > 1);

    let mut result = String::with_capacity(39);
    let mut i = 0;
    while i < groups.len() {
        if let Some(run) = &compress
            && run.start == i
        {
            result.push_str("::");
            i = run.end;
            continue;
        }

        if i > 0 && !result.ends_with(':') {
            result.push(':');
        }
        let _ = write!(&mut result, "{:x}", groups[i]);
        i += 1;
    }
    result
}

/// Find the first longest run of consecutive zero groups.
fn find_longest_zero_run(groups: &[u16; 8]) -> Option<core::ops::Range<usize>> {
    let mut best: Option<core::ops::Range<usize>> = None;
    let mut current_start = None;

    for (i, &group) in groups.iter().enumerate() {
        if group == 0 {
            let start = *current_start.get_or_insert(i);
            if best.as_ref().is_none_or(|b| i + 1 - start > b.len()) {
                best = Some(start..i + 1);
            }
        } else {
            current_start = None;
        }
    }
    best
}

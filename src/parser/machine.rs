use super::State;
use crate::Url;
use crate::character_sets::{is_double_dot_segment, is_scheme_byte, is_single_dot_segment};
use crate::checkers::parse_port;
use crate::compat::{String, Vec};
use crate::error::{ParseError, Result};
use crate::helpers::{clean_tabs_and_newlines, find_delimiter};
use crate::host::{Host, parse_host};
use crate::scheme;
use crate::types::SchemeType;
use crate::unicode::percent_encode::{self, EncodeSet};
use crate::url_components::{Path, UserInfo};

/// Parse `input`, resolving it against `base` when it has no scheme.
///
/// # Errors
///
/// Returns the single [`ParseError`] kind describing why the input is not a URL.
pub fn parse_url(input: &str, base: Option<&Url>) -> Result<Url> {
    let input = clean_tabs_and_newlines(input);
    let mut parser = Parser::new(&input, base);

    let mut state = State::SchemeStart;
    while let Some(next) = parser.step(state)? {
        state = next;
    }
    Ok(parser.finish())
}

/// Cursor over the cleaned input plus the components collected so far.
/// Lives for a single `parse_url` call.
struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pointer: usize,
    base: Option<&'a Url>,

    scheme: String,
    scheme_type: SchemeType,
    userinfo: Option<UserInfo>,
    credentials_seen: bool,
    authority_end: usize,
    host: Host,
    port: Option<u16>,
    segments: Vec<String>,
    opaque_path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, base: Option<&'a Url>) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pointer: 0,
            base,
            scheme: String::new(),
            scheme_type: SchemeType::NotSpecial,
            userinfo: None,
            credentials_seen: false,
            authority_end: 0,
            host: Host::Absent,
            port: None,
            segments: Vec::new(),
            opaque_path: None,
            query: None,
            fragment: None,
        }
    }

    /// Run one state; `None` means the input was fully consumed and accepted.
    fn step(&mut self, state: State) -> Result<Option<State>> {
        match state {
            State::SchemeStart => self.scheme_start(),
            State::Scheme => self.scheme(),
            State::RelativeNoScheme => self.relative(),
            State::SpecialAuthoritySlashes => Ok(self.special_authority_slashes()),
            State::PathOrAuthority => Ok(self.path_or_authority()),
            State::Authority => Ok(self.authority()),
            State::Host => self.host(),
            State::Port => self.port(),
            State::Path => Ok(self.path()),
            State::OpaquePath => Ok(self.opaque_path()),
            State::Query => Ok(self.query()),
            State::Fragment => Ok(self.fragment()),
        }
    }

    fn finish(self) -> Url {
        let path = match self.opaque_path {
            Some(opaque) => Path::Opaque(opaque),
            None => Path::Segments(self.segments),
        };
        Url {
            scheme: self.scheme,
            scheme_type: self.scheme_type,
            userinfo: self.userinfo,
            host: self.host,
            port: self.port,
            path,
            query: self.query,
            fragment: self.fragment,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pointer).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pointer + offset).copied()
    }

    fn is_separator(&self, b: Option<u8>) -> bool {
        b.is_some_and(|b| self.scheme_type.is_path_separator(b))
    }

    fn scheme_start(&mut self) -> Result<Option<State>> {
        match (self.peek(), self.base) {
            (Some(b), _) if b.is_ascii_alphabetic() => Ok(Some(State::Scheme)),
            (_, Some(_)) => Ok(Some(State::RelativeNoScheme)),
            (None, None) => Err(ParseError::MissingScheme),
            (Some(_), None) => Err(ParseError::InvalidScheme),
        }
    }

    fn scheme(&mut self) -> Result<Option<State>> {
        let end = self
            .bytes
            .iter()
            .position(|&b| !is_scheme_byte(b))
            .unwrap_or(self.bytes.len());

        // No ':' right after the scheme characters: a scheme-less reference
        if self.bytes.get(end) != Some(&b':') {
            return match self.base {
                Some(_) => Ok(Some(State::RelativeNoScheme)),
                None => Err(ParseError::MissingScheme),
            };
        }

        self.scheme = self.input[..end].to_ascii_lowercase();
        self.scheme_type = scheme::lookup(&self.scheme);
        self.pointer = end + 1;

        if !self.scheme_type.is_special() {
            return Ok(Some(State::PathOrAuthority));
        }

        // "http:foo" against an http base is relative
        if let Some(base) = self.base
            && base.scheme == self.scheme
            && !self.is_separator(self.peek())
        {
            return Ok(Some(State::RelativeNoScheme));
        }
        Ok(Some(State::SpecialAuthoritySlashes))
    }

    fn relative(&mut self) -> Result<Option<State>> {
        let base = self.base.ok_or(ParseError::MissingScheme)?;

        if self.scheme.is_empty() {
            self.scheme.clone_from(&base.scheme);
            self.scheme_type = base.scheme_type;
        }

        // An opaque base only accepts fragment-only references
        if let Path::Opaque(opaque) = &base.path {
            if self.peek() != Some(b'#') {
                return Err(ParseError::MissingScheme);
            }
            self.opaque_path = Some(opaque.clone());
            self.query.clone_from(&base.query);
            self.pointer += 1;
            return Ok(Some(State::Fragment));
        }

        let next = self.peek();
        if self.is_separator(next) && self.is_separator(self.peek_at(1)) {
            if self.scheme_type.is_special() && self.scheme_type != SchemeType::File {
                return Ok(Some(State::SpecialAuthoritySlashes));
            }
            self.pointer += 2;
            return Ok(Some(State::Authority));
        }

        self.userinfo.clone_from(&base.userinfo);
        self.host = base.host.clone();
        self.port = base.port;
        let base_segments = base.path.segments().unwrap_or_default();

        match next {
            Some(_) if self.is_separator(next) => {
                self.pointer += 1;
                Ok(Some(State::Path))
            }
            None => {
                self.segments = base_segments.to_vec();
                self.query.clone_from(&base.query);
                Ok(None)
            }
            Some(b'?') => {
                self.segments = base_segments.to_vec();
                self.pointer += 1;
                Ok(Some(State::Query))
            }
            Some(b'#') => {
                self.segments = base_segments.to_vec();
                self.query.clone_from(&base.query);
                self.pointer += 1;
                Ok(Some(State::Fragment))
            }
            Some(_) => {
                self.segments = base_segments.to_vec();
                self.segments.pop();
                Ok(Some(State::Path))
            }
        }
    }

    fn special_authority_slashes(&mut self) -> Option<State> {
        if self.scheme_type != SchemeType::File {
            while self.is_separator(self.peek()) {
                self.pointer += 1;
            }
            return Some(State::Authority);
        }

        // file: takes exactly "//" before its (possibly empty) host
        if self.is_separator(self.peek()) && self.is_separator(self.peek_at(1)) {
            self.pointer += 2;
            return Some(State::Authority);
        }
        self.host = Host::Domain(String::new());
        self.enter_path()
    }

    fn path_or_authority(&mut self) -> Option<State> {
        if self.peek() == Some(b'/') && self.peek_at(1) == Some(b'/') {
            self.pointer += 2;
            Some(State::Authority)
        } else {
            Some(State::OpaquePath)
        }
    }

    fn authority(&mut self) -> Option<State> {
        let delimiters: &[u8] = if self.scheme_type.is_special() {
            b"/\\?#"
        } else {
            b"/?#"
        };
        self.authority_end = find_delimiter(self.bytes, self.pointer, delimiters);
        let authority = &self.input[self.pointer..self.authority_end];

        // file: authorities are all host
        if self.scheme_type != SchemeType::File
            && let Some(at) = memchr::memrchr(b'@', authority.as_bytes())
        {
            let credentials = &authority[..at];
            let (username, password) = credentials.split_once(':').unwrap_or((credentials, ""));
            self.userinfo = UserInfo::new(
                percent_encode::encode(username, EncodeSet::Userinfo),
                percent_encode::encode(password, EncodeSet::Userinfo),
            );
            self.credentials_seen = true;
            self.pointer += at + 1;
        }
        Some(State::Host)
    }

    fn host(&mut self) -> Result<Option<State>> {
        let mut inside_brackets = false;
        let host_end = self.bytes[self.pointer..self.authority_end]
            .iter()
            .position(|&b| {
                match b {
                    b'[' => inside_brackets = true,
                    b']' => inside_brackets = false,
                    b':' if !inside_brackets => return true,
                    _ => {}
                }
                false
            })
            .map_or(self.authority_end, |pos| self.pointer + pos);

        let raw = &self.input[self.pointer..host_end];
        let has_port = host_end < self.authority_end;
        if raw.is_empty() && (self.credentials_seen || has_port) {
            return Err(ParseError::InvalidHost);
        }

        self.host = parse_host(raw, self.scheme_type)?;
        self.pointer = host_end;

        if has_port {
            self.pointer += 1;
            return Ok(Some(State::Port));
        }
        Ok(self.enter_path())
    }

    fn port(&mut self) -> Result<Option<State>> {
        self.port = parse_port(&self.input[self.pointer..self.authority_end])?;
        if self.port.is_some() && self.scheme_type == SchemeType::File {
            return Err(ParseError::InvalidPort);
        }
        self.pointer = self.authority_end;
        Ok(self.enter_path())
    }

    /// Route from the end of an authority into the path, query, or fragment.
    fn enter_path(&mut self) -> Option<State> {
        let next = self.peek();
        if self.is_separator(next) {
            self.pointer += 1;
            return Some(State::Path);
        }
        if next.is_some_and(|b| b != b'?' && b != b'#') {
            return Some(State::Path);
        }

        // Special URLs always have at least the root segment
        if self.scheme_type.is_special() {
            self.segments.push(String::new());
        }
        self.after_component()
    }

    /// Dispatch on the delimiter at the cursor once a component is consumed.
    fn after_component(&mut self) -> Option<State> {
        let next = self.peek()?;
        self.pointer += 1;
        match next {
            b'?' => Some(State::Query),
            b'#' => Some(State::Fragment),
            _ => Some(State::Path),
        }
    }

    fn path(&mut self) -> Option<State> {
        let delimiters: &[u8] = if self.scheme_type.is_special() {
            b"/\\?#"
        } else {
            b"/?#"
        };
        let end = find_delimiter(self.bytes, self.pointer, delimiters);
        let segment = &self.input[self.pointer..end];
        self.pointer = end;
        let continues = self.is_separator(self.peek());

        if is_double_dot_segment(segment) {
            self.segments.pop();
            if !continues {
                self.segments.push(String::new());
            }
        } else if is_single_dot_segment(segment) {
            if !continues {
                self.segments.push(String::new());
            }
        } else {
            self.segments
                .push(percent_encode::encode(segment, EncodeSet::Path));
        }
        self.after_component()
    }

    fn opaque_path(&mut self) -> Option<State> {
        let end = find_delimiter(self.bytes, self.pointer, b"?#");
        let path = &self.input[self.pointer..end];
        self.opaque_path = Some(percent_encode::encode(path, EncodeSet::C0Control));
        self.pointer = end;
        self.after_component()
    }

    fn query(&mut self) -> Option<State> {
        let end = find_delimiter(self.bytes, self.pointer, b"#");
        let set = if self.scheme_type.is_special() {
            EncodeSet::SpecialQuery
        } else {
            EncodeSet::Query
        };
        self.query = Some(percent_encode::encode(&self.input[self.pointer..end], set));
        self.pointer = end;
        self.after_component()
    }

    fn fragment(&mut self) -> Option<State> {
        let rest = &self.input[self.pointer..];
        self.fragment = Some(percent_encode::encode(rest, EncodeSet::Fragment));
        self.pointer = self.bytes.len();
        None
    }
}

use crate::compat::{Cow, String, ToString, Vec, format};
use crate::error::{ParseError, Result};
use crate::host::{Host, parse_host};
use crate::parser::parse_url;
use crate::serializer::{self, Parts};
use crate::types::SchemeType;
use crate::unicode::percent_encode;
use crate::url_components::{Path, UserInfo};

/// A parsed URL record
///
/// Built once by the parser and never mutated. The `with_*` methods assemble a
/// new string and re-parse it into a fresh record.
///
/// ```
/// use url_record::Url;
///
/// let url = Url::parse("https://example.com:8080/path?query=value#hash", None)?;
/// assert_eq!(url.protocol(), "https:");
/// assert_eq!(url.hostname().as_deref(), Some("example.com"));
/// assert_eq!(url.port(), Some(8080));
/// assert_eq!(url.pathname(), "/path");
/// assert_eq!(url.search(), Some("query=value"));
/// assert_eq!(url.hash().as_deref(), Some("#hash"));
/// # Ok::<(), url_record::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url {
    pub(crate) scheme: String,
    pub(crate) scheme_type: SchemeType,
    pub(crate) userinfo: Option<UserInfo>,
    pub(crate) host: Host,
    pub(crate) port: Option<u16>,
    pub(crate) path: Path,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

impl Url {
    /// Parse a URL, resolving scheme-less input against `base`.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] kind describing the first violation found.
    pub fn parse(input: &str, base: Option<&Url>) -> Result<Self> {
        parse_url(input, base)
    }

    /// Check if a URL string can be parsed
    ///
    /// ```
    /// use url_record::Url;
    ///
    /// assert!(Url::can_parse("http://example.com", None));
    /// assert!(!Url::can_parse("not a url", None));
    /// ```
    pub fn can_parse(input: &str, base: Option<&Url>) -> bool {
        parse_url(input, base).is_ok()
    }

    /// Resolve `input` against this URL
    ///
    /// # Errors
    ///
    /// Same as [`Url::parse`].
    pub fn join(&self, input: &str) -> Result<Self> {
        parse_url(input, Some(self))
    }

    /// Get the full serialized URL
    pub fn href(&self) -> String {
        serializer::render(self)
    }

    /// Get the scheme with its trailing colon (e.g. "https:")
    pub fn protocol(&self) -> String {
        format!("{}:", self.scheme)
    }

    /// Get the lowercase scheme without colon
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the scheme type
    pub fn scheme_type(&self) -> SchemeType {
        self.scheme_type
    }

    /// Check if the scheme is special (http, https, ws, wss, ftp, file)
    pub fn is_special(&self) -> bool {
        self.scheme_type.is_special()
    }

    /// Get the userinfo, if any
    pub fn userinfo(&self) -> Option<&UserInfo> {
        self.userinfo.as_ref()
    }

    /// Get the username (empty if none)
    pub fn username(&self) -> &str {
        self.userinfo.as_ref().map_or("", UserInfo::username)
    }

    /// Get the password
    pub fn password(&self) -> Option<&str> {
        self.userinfo.as_ref().and_then(UserInfo::password)
    }

    /// Get the host variant
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Get the serialized host without port; `None` for URLs without authority
    pub fn hostname(&self) -> Option<String> {
        self.host.serialize().map(Cow::into_owned)
    }

    /// Get the port exactly as given in the input, even when it is the default
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Get the explicit port, or the scheme's default port
    pub fn port_or_known_default(&self) -> Option<u16> {
        self.port.or_else(|| self.scheme_type.default_port())
    }

    /// Get the path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the serialized path
    pub fn pathname(&self) -> Cow<'_, str> {
        self.path.serialize()
    }

    /// Check if URL has an opaque path
    pub fn has_opaque_path(&self) -> bool {
        self.path.is_opaque()
    }

    /// Get the escaped path segments; `None` for opaque paths
    pub fn path_segments(&self) -> Option<&[String]> {
        self.path.segments()
    }

    /// Get the path segments percent-decoded for display.
    /// Each segment is decoded on its own, so `%2F` never splits a segment.
    pub fn decoded_path_segments(&self) -> Option<Vec<String>> {
        self.path.segments().map(|segments| {
            segments
                .iter()
                .map(|s| percent_encode::decode_utf8_lossy(s))
                .collect()
        })
    }

    /// Get the query without its leading `?`
    pub fn search(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Get the fragment without its leading `#`
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Get the fragment with its leading `#`
    pub fn hash(&self) -> Option<String> {
        self.fragment.as_ref().map(|f| format!("#{f}"))
    }

    /// Get the origin.
    ///
    /// `scheme://host[:port]` for special URLs with a non-empty host, otherwise
    /// the full serialized URL.
    pub fn origin(&self) -> String {
        if !self.is_special() || self.host.is_empty() {
            return self.href();
        }
        match self.port {
            Some(port) => format!("{}://{}:{port}", self.scheme, self.host),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }

    /// Return a copy with a different host.
    ///
    /// # Errors
    ///
    /// Fails with the host parser's error, or [`ParseError::InvalidHost`] if this
    /// URL has no authority.
    pub fn with_hostname(&self, hostname: &str) -> Result<Self> {
        if self.host.is_absent() {
            return Err(ParseError::InvalidHost);
        }
        let host = parse_host(hostname, self.scheme_type)?;
        let mut parts = Parts::of(self);
        parts.host = host.serialize();
        Self::reparse(&parts)
    }

    /// Return a copy with a different port, or none.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidPort`] if this URL cannot carry a port.
    pub fn with_port(&self, port: Option<u16>) -> Result<Self> {
        if port.is_some() && (self.host.is_absent() || self.scheme_type == SchemeType::File) {
            return Err(ParseError::InvalidPort);
        }
        let mut parts = Parts::of(self);
        parts.port = port;
        Self::reparse(&parts)
    }

    /// Return a copy with a different path.
    ///
    /// `?` and `#` are escaped so the new path cannot spill into the query.
    ///
    /// # Errors
    ///
    /// Any error from re-parsing the assembled URL.
    pub fn with_pathname(&self, pathname: &str) -> Result<Self> {
        let mut escaped = pathname.replace('?', "%3F").replace('#', "%23");
        if self.has_opaque_path() {
            // A leading "//" would turn the opaque path into an authority
            if escaped.starts_with("//") {
                escaped.replace_range(1..2, "%2F");
            }
        } else if escaped
            .bytes()
            .next()
            .is_some_and(|b| !self.scheme_type.is_path_separator(b))
        {
            escaped.insert(0, '/');
        }

        let mut parts = Parts::of(self);
        parts.pathname = Cow::Owned(escaped);
        Self::reparse(&parts)
    }

    /// Return a copy with a different query (leading `?` optional), or none.
    ///
    /// # Errors
    ///
    /// Any error from re-parsing the assembled URL.
    pub fn with_search(&self, search: Option<&str>) -> Result<Self> {
        let mut parts = Parts::of(self);
        parts.query = search.map(|s| {
            let s = s.strip_prefix('?').unwrap_or(s);
            Cow::Owned(s.replace('#', "%23"))
        });
        Self::reparse(&parts)
    }

    /// Return a copy with a different fragment (leading `#` optional), or none.
    ///
    /// # Errors
    ///
    /// Any error from re-parsing the assembled URL.
    pub fn with_hash(&self, hash: Option<&str>) -> Result<Self> {
        let mut parts = Parts::of(self);
        parts.fragment = hash.map(|s| Cow::Borrowed(s.strip_prefix('#').unwrap_or(s)));
        Self::reparse(&parts)
    }

    fn reparse(parts: &Parts<'_>) -> Result<Self> {
        parse_url(&parts.render(), None)
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.href())
    }
}

impl core::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_url(s, None)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.to_string()
    }
}

/// URL parser state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// First character: a letter starts a scheme
    SchemeStart,
    /// Scheme characters up to `:`
    Scheme,
    /// Input without a scheme, resolved against the base URL
    RelativeNoScheme,
    /// Slashes between a special scheme and its authority
    SpecialAuthoritySlashes,
    /// Non-special scheme: `//` starts an authority, anything else is opaque
    PathOrAuthority,
    /// Userinfo section of the authority
    Authority,
    /// Host section of the authority
    Host,
    /// Port digits after the host
    Port,
    /// One hierarchical path segment
    Path,
    /// Opaque path of a URL without authority
    OpaquePath,
    /// Query after `?`
    Query,
    /// Fragment after `#`
    Fragment,
}

//! Structured URL parsing and canonical serialization.
//!
//! A URL is parsed once into an immutable [`Url`] record with typed components
//! (scheme, userinfo, [`Host`], port, [`Path`], query, fragment). Rendering a record
//! and parsing the result again yields the same record.
//!
//! ```
//! let url = url_record::parse("https://google.com:443/search", None)?;
//! assert_eq!(url.hostname().as_deref(), Some("google.com"));
//! assert_eq!(url.port(), Some(443));
//! assert_eq!(url_record::serialize(&url), "https://google.com:443/search");
//! # Ok::<(), url_record::ParseError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod ipv4;
mod ipv6;
mod parser;
mod types;
mod unicode;
mod url;
mod url_components;

// Component modules usable on their own
pub mod host;
pub mod scheme;
pub mod serializer;
pub use unicode::percent_encode;

// Public API
pub use error::{ParseError, Result};
pub use host::Host;
pub use parser::State;
pub use percent_encode::EncodeSet;
pub use types::SchemeType;
pub use url::Url;
pub use url_components::{Path, UserInfo};

/// Parse `input`, resolving it against `base` when it has no scheme.
///
/// # Errors
///
/// Returns the [`ParseError`] kind describing why `input` is not a URL.
pub fn parse(input: &str, base: Option<&Url>) -> Result<Url> {
    parser::parse_url(input, base)
}

/// Render a URL record to its canonical string.
pub fn serialize(url: &Url) -> compat::String {
    serializer::render(url)
}

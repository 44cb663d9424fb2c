//! Canonical string form of a [`Url`].

use crate::Url;
use crate::compat::{Cow, String};
use core::fmt::Write;

/// Textual pieces of a URL, already escaped.
///
/// `render` builds these from a record; the update operations replace one piece
/// and re-parse the result.
#[derive(Debug, Clone)]
pub(crate) struct Parts<'a> {
    pub scheme: &'a str,
    pub username: &'a str,
    pub password: Option<&'a str>,
    pub host: Option<Cow<'a, str>>,
    pub port: Option<u16>,
    pub pathname: Cow<'a, str>,
    pub query: Option<Cow<'a, str>>,
    pub fragment: Option<Cow<'a, str>>,
}

impl<'a> Parts<'a> {
    pub fn of(url: &'a Url) -> Self {
        let (username, password) = url
            .userinfo
            .as_ref()
            .map_or(("", None), |info| (info.username(), info.password()));

        Self {
            scheme: &url.scheme,
            username,
            password,
            host: url.host.serialize(),
            port: url.port,
            pathname: url.path.serialize(),
            query: url.query.as_deref().map(Cow::Borrowed),
            fragment: url.fragment.as_deref().map(Cow::Borrowed),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.scheme.len()
                + self.host.as_ref().map_or(0, |h| h.len() + 2)
                + self.pathname.len()
                + self.query.as_ref().map_or(0, |q| q.len() + 1)
                + self.fragment.as_ref().map_or(0, |f| f.len() + 1)
                + 8,
        );

        out.push_str(self.scheme);
        out.push(':');

        if let Some(host) = &self.host {
            out.push_str("//");
            if !self.username.is_empty() || self.password.is_some() {
                out.push_str(self.username);
                if let Some(password) = self.password {
                    out.push(':');
                    out.push_str(password);
                }
                out.push('@');
            }
            out.push_str(host);
            if let Some(port) = self.port {
                let _ = write!(out, ":{port}");
            }
        }

        out.push_str(&self.pathname);

        if let Some(query) = &self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
        out
    }
}

/// Render a URL record to its canonical string.
///
/// `scheme ":"`, then `"//" [userinfo "@"] host [":" port]` when a host is
/// present, then the path, `"?" query` and `"#" fragment`.
pub fn render(url: &Url) -> String {
    Parts::of(url).render()
}
